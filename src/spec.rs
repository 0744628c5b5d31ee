// Copyright 2025 Cowboy AI, LLC.

//! Topology Input Specifications
//!
//! The complete input surface for one compile run: the network shape, one
//! subnet request per tier, and the provider configuration. Inputs are
//! immutable for the run and deserialize from a settings file with the
//! documented defaults.

use crate::value_objects::{AvailabilityZone, CidrBlock, TagMap};
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_subnet_count() -> usize {
    2
}

fn default_region() -> String {
    "us-west-2".to_owned()
}

/// Specification for the virtual network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// CIDR block for the network
    pub cidr_block: CidrBlock,
    /// Whether DNS resolution is enabled inside the network
    #[serde(default = "default_enabled")]
    pub dns_support: bool,
    /// Whether instances receive DNS hostnames
    #[serde(default = "default_enabled")]
    pub dns_hostnames: bool,
    /// Name prefix for every planned resource
    pub name: String,
    /// Network-wide tags, merged into every resource's tag set
    #[serde(default)]
    pub tags: TagMap,
}

/// Specification for one subnet tier
///
/// `cidrs` is positional: index `i` of the tier takes `cidrs[i]`, so the list
/// must cover `count`. Zones are assigned round-robin and the list must not
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRequest {
    /// Number of subnets to plan for this tier
    #[serde(default = "default_subnet_count")]
    pub count: usize,
    /// CIDR block per subnet index
    #[serde(default)]
    pub cidrs: Vec<CidrBlock>,
    /// Availability zones, assigned round-robin across subnet indices
    #[serde(default)]
    pub zones: Vec<AvailabilityZone>,
}

impl Default for SubnetRequest {
    fn default() -> Self {
        Self {
            count: default_subnet_count(),
            cidrs: Vec::new(),
            zones: Vec::new(),
        }
    }
}

/// Complete input surface for one compile run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyRequest {
    /// The virtual network
    pub network: NetworkSpec,
    /// Public tier subnets
    #[serde(default)]
    pub public: SubnetRequest,
    /// Private tier subnets
    #[serde(default)]
    pub private: SubnetRequest,
}

/// Provider configuration, threaded explicitly into the compile call
///
/// Never ambient process-wide state: callers pass the value they mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Target region
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_spec_defaults() {
        let spec: NetworkSpec =
            serde_json::from_str(r#"{"cidr_block": "10.0.0.0/16", "name": "prod"}"#).unwrap();

        assert!(spec.dns_support);
        assert!(spec.dns_hostnames);
        assert!(spec.tags.is_empty());
    }

    #[test]
    fn test_subnet_request_defaults() {
        let request: TopologyRequest =
            serde_json::from_str(r#"{"network": {"cidr_block": "10.0.0.0/16", "name": "prod"}}"#)
                .unwrap();

        assert_eq!(request.public.count, 2);
        assert_eq!(request.private.count, 2);
        assert!(request.public.cidrs.is_empty());
    }

    #[test]
    fn test_provider_config_default_region() {
        let config: ProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn test_full_request_round_trip() {
        let request: TopologyRequest = serde_json::from_str(
            r#"{
                "network": {
                    "cidr_block": "10.0.0.0/16",
                    "name": "prod",
                    "tags": {"team": "platform"}
                },
                "public": {
                    "count": 1,
                    "cidrs": ["10.0.1.0/24"],
                    "zones": ["us-west-2a"]
                },
                "private": {
                    "count": 0,
                    "zones": ["us-west-2a"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(request.public.count, 1);
        assert_eq!(request.private.count, 0);

        let json = serde_json::to_string(&request).unwrap();
        let back: TopologyRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
