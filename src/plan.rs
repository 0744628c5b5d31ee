// Copyright 2025 Cowboy AI, LLC.

//! Planned Topology Entities
//!
//! Every entity here is a value derived once per compile run; recompiling
//! with different inputs builds a new set rather than mutating a prior one.
//! Cross-resource references are [`ResourceHandle`]s, never positional
//! indices, so a provisioning engine can always name the entity a failure
//! belongs to.

use crate::value_objects::{AvailabilityZone, CidrBlock, ResourceHandle, TagMap, Tier};
use serde::{Deserialize, Serialize};

// ============================================================================
// Network Core
// ============================================================================

/// The virtual network itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPlan {
    pub handle: ResourceHandle,
    pub cidr_block: CidrBlock,
    pub dns_support: bool,
    pub dns_hostnames: bool,
    pub tags: TagMap,
}

/// Internet gateway; always present, owned by the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPlan {
    pub handle: ResourceHandle,
    pub network: ResourceHandle,
    pub tags: TagMap,
}

/// One planned subnet
///
/// Indices within a tier are dense, zero-based, and stable across recompiles
/// of the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetPlan {
    pub handle: ResourceHandle,
    pub index: usize,
    pub tier: Tier,
    pub cidr: CidrBlock,
    pub zone: AvailabilityZone,
    pub tags: TagMap,
}

// ============================================================================
// NAT Path
// ============================================================================

/// Elastic IP backing the NAT gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EipPlan {
    pub handle: ResourceHandle,
    pub tags: TagMap,
}

/// The NAT path: one Elastic IP plus one NAT gateway anchored to a public
/// subnet
///
/// A topology has at most one NAT path regardless of private subnet count;
/// the single shared gateway is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatPlan {
    pub handle: ResourceHandle,
    pub eip: EipPlan,
    /// Public subnet the gateway is placed in
    pub subnet: ResourceHandle,
    pub tags: TagMap,
}

// ============================================================================
// Routing
// ============================================================================

/// Target of a default route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "handle", rename_all = "snake_case")]
pub enum RouteTarget {
    InternetGateway(ResourceHandle),
    NatGateway(ResourceHandle),
}

/// A single routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub destination: CidrBlock,
    pub target: RouteTarget,
}

/// Route table with its default route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTablePlan {
    pub handle: ResourceHandle,
    pub tier: Tier,
    pub network: ResourceHandle,
    pub default_route: RoutePlan,
    pub tags: TagMap,
}

/// Binding of one subnet to the route table of its tier
///
/// Every subnet has exactly one association; associations never cross tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationPlan {
    pub handle: ResourceHandle,
    pub subnet: ResourceHandle,
    pub route_table: ResourceHandle,
    pub tier: Tier,
}

// ============================================================================
// Security
// ============================================================================

/// Protocol selector for security and ACL rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    All,
}

/// One security group rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRule {
    pub protocol: Protocol,
    pub from_port: u16,
    pub to_port: u16,
    pub cidr: CidrBlock,
}

impl SecurityRule {
    /// Single-port TCP rule
    pub fn tcp(port: u16, cidr: CidrBlock) -> Self {
        Self {
            protocol: Protocol::Tcp,
            from_port: port,
            to_port: port,
            cidr,
        }
    }

    /// All protocols, all ports
    pub fn all_traffic(cidr: CidrBlock) -> Self {
        Self {
            protocol: Protocol::All,
            from_port: 0,
            to_port: 65535,
            cidr,
        }
    }
}

/// Security group with static, tier-keyed rules
///
/// Rule contents are fixed; only the network reference and name prefix vary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroupPlan {
    pub handle: ResourceHandle,
    pub tier: Tier,
    pub network: ResourceHandle,
    pub description: String,
    pub ingress: Vec<SecurityRule>,
    pub egress: Vec<SecurityRule>,
    pub tags: TagMap,
}

/// Whether an ACL entry allows or denies matching traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaclAction {
    Allow,
    Deny,
}

/// One network ACL entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaclEntry {
    /// Evaluation order; part of the fixed rule constants, not derived from
    /// input
    pub rule_number: u16,
    pub protocol: Protocol,
    pub from_port: u16,
    pub to_port: u16,
    pub cidr: CidrBlock,
    pub action: NaclAction,
    pub egress: bool,
}

impl NaclEntry {
    pub fn allow(
        rule_number: u16,
        protocol: Protocol,
        from_port: u16,
        to_port: u16,
        cidr: CidrBlock,
        egress: bool,
    ) -> Self {
        Self {
            rule_number,
            protocol,
            from_port,
            to_port,
            cidr,
            action: NaclAction::Allow,
            egress,
        }
    }
}

/// Network ACL with static, tier-keyed entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaclPlan {
    pub handle: ResourceHandle,
    pub tier: Tier,
    pub network: ResourceHandle,
    pub entries: Vec<NaclEntry>,
    pub tags: TagMap,
}
