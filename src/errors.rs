//! Error types for topology compilation

use crate::value_objects::{Tier, ValueError};
use thiserror::Error;

/// Malformed or insufficient input, caught by the parameter validator
///
/// Always recoverable by correcting the input; never retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A tier requests more subnets than it has CIDR blocks for
    #[error("{tier} tier requests {count} subnets but only {available} CIDR blocks are configured")]
    InsufficientCidrs {
        tier: Tier,
        count: usize,
        available: usize,
    },

    /// A tier has no availability zones to assign from
    #[error("{tier} tier has an empty availability zone list")]
    NoAvailabilityZones { tier: Tier },

    /// The resource name prefix is empty
    #[error("network name prefix cannot be empty")]
    EmptyNamePrefix,

    /// A value object failed structural validation
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A planned resource references another that was not planned
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// The NAT path needs a public subnet to anchor to
    #[error("NAT gateway requires a public subnet to anchor to, but the public tier is empty")]
    NatAnchorMissing,

    /// Private subnets were planned without a NAT path to route through
    #[error("private subnets exist but no NAT path was planned")]
    PrivateRouteWithoutNat,
}

/// Any failure of a compile run
///
/// The compiler fails fast and wholly; a partially valid graph is never
/// emitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

/// Result type for topology compilation
pub type CompileResult<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_the_offending_field() {
        let err = ConfigurationError::InsufficientCidrs {
            tier: Tier::Private,
            count: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "private tier requests 3 subnets but only 1 CIDR blocks are configured"
        );
    }

    #[test]
    fn test_compile_error_wraps_both_taxonomies() {
        let config: CompileError = ConfigurationError::EmptyNamePrefix.into();
        assert!(matches!(config, CompileError::Configuration(_)));

        let dependency: CompileError = DependencyError::NatAnchorMissing.into();
        assert!(matches!(dependency, CompileError::Dependency(_)));
    }
}
