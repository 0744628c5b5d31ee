// Copyright 2025 Cowboy AI, LLC.

//! Topology Value Objects
//!
//! Building blocks of the topology model. All value objects are immutable,
//! validated on construction, and serialize in their canonical text form.

use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Error types for topology value objects
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid CIDR block {input:?}: {reason}")]
    InvalidCidr { input: String, reason: String },

    #[error("availability zone identifier cannot be empty")]
    EmptyZone,
}

// ============================================================================
// Network Value Objects
// ============================================================================

/// IPv4 CIDR block
///
/// Blocks are operator-supplied and checked only for structural validity.
/// Overlap between blocks is not the compiler's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CidrBlock(Ipv4Network);

impl CidrBlock {
    pub fn new(address: Ipv4Addr, prefix_len: u8) -> Result<Self, ValueError> {
        let network = Ipv4Network::new(address, prefix_len).map_err(|e| ValueError::InvalidCidr {
            input: format!("{address}/{prefix_len}"),
            reason: e.to_string(),
        })?;
        Ok(Self(network))
    }

    /// The unrestricted block, `0.0.0.0/0`
    pub fn anywhere() -> Self {
        Self(Ipv4Network::new(Ipv4Addr::UNSPECIFIED, 0).expect("prefix 0 is always valid"))
    }

    pub fn address(&self) -> Ipv4Addr {
        self.0.ip()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix()
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CidrBlock {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = s.parse::<Ipv4Network>().map_err(|e| ValueError::InvalidCidr {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(network))
    }
}

impl From<CidrBlock> for String {
    fn from(cidr: CidrBlock) -> Self {
        cidr.to_string()
    }
}

impl TryFrom<String> for CidrBlock {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Availability zone identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityZone(String);

impl AvailabilityZone {
    pub fn new(zone: impl Into<String>) -> Result<Self, ValueError> {
        let zone = zone.into();
        if zone.is_empty() {
            return Err(ValueError::EmptyZone);
        }
        Ok(Self(zone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvailabilityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AvailabilityZone {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// Identity Value Objects
// ============================================================================

/// Public or private classification of a subnet, determining routing and
/// security posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Public,
    Private,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Public => "public",
            Tier::Private => "private",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logical identifier a planned resource is known by inside the graph
///
/// Handles are derived from the operator-supplied name prefix, so they are
/// stable across recompiles of the same input. Every cross-resource reference
/// in the graph is a handle, never a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tags
// ============================================================================

/// Ordered tag mapping applied to planned resources
pub type TagMap = BTreeMap<String, String>;

/// Right-biased merge of two tag mappings
///
/// Keys from `overrides` win on conflict; all other keys pass through
/// unmodified. The result is independent of iteration order, and merging
/// the same overrides twice yields the same mapping as merging once.
pub fn merge_tags(base: &TagMap, overrides: &TagMap) -> TagMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Tag set for a named resource
///
/// The network-wide tags with the `Name` key overridden per resource.
pub fn tags_with_name(base: &TagMap, name: &ResourceHandle) -> TagMap {
    let mut overrides = TagMap::new();
    overrides.insert("Name".to_string(), name.as_str().to_string());
    merge_tags(base, &overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_block_parsing() {
        let cidr: CidrBlock = "10.0.1.0/24".parse().unwrap();
        assert_eq!(cidr.prefix_len(), 24);
        assert_eq!(cidr.address(), Ipv4Addr::new(10, 0, 1, 0));
        assert_eq!(cidr.to_string(), "10.0.1.0/24");
    }

    #[test]
    fn test_cidr_block_rejects_garbage() {
        assert!("10.0.1.0/33".parse::<CidrBlock>().is_err());
        assert!("not-a-cidr".parse::<CidrBlock>().is_err());
    }

    #[test]
    fn test_cidr_block_serializes_as_text() {
        let cidr: CidrBlock = "10.0.1.0/24".parse().unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"10.0.1.0/24\"");

        let back: CidrBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
    }

    #[test]
    fn test_anywhere_is_the_default_route_destination() {
        assert_eq!(CidrBlock::anywhere().to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_availability_zone_rejects_empty() {
        assert!(AvailabilityZone::new("us-west-2a").is_ok());
        assert!(AvailabilityZone::new("").is_err());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::Public.to_string(), "public");
        assert_eq!(Tier::Private.to_string(), "private");
    }

    #[test]
    fn test_merge_tags_is_right_biased() {
        let mut base = TagMap::new();
        base.insert("team".into(), "platform".into());
        base.insert("Name".into(), "from-network".into());

        let mut overrides = TagMap::new();
        overrides.insert("Name".into(), "from-resource".into());

        let merged = merge_tags(&base, &overrides);
        assert_eq!(merged.get("Name"), Some(&"from-resource".to_string()));
        assert_eq!(merged.get("team"), Some(&"platform".to_string()));
    }

    #[test]
    fn test_merge_tags_is_idempotent() {
        let mut base = TagMap::new();
        base.insert("env".into(), "prod".into());

        let mut overrides = TagMap::new();
        overrides.insert("Name".into(), "prod-vpc".into());

        let once = merge_tags(&base, &overrides);
        let twice = merge_tags(&once, &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tags_with_name_overrides_name_key() {
        let mut base = TagMap::new();
        base.insert("Name".into(), "wrong".into());
        base.insert("owner".into(), "network-team".into());

        let tags = tags_with_name(&base, &ResourceHandle::new("prod-public-0"));
        assert_eq!(tags.get("Name"), Some(&"prod-public-0".to_string()));
        assert_eq!(tags.get("owner"), Some(&"network-team".to_string()));
    }
}
