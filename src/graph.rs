// Copyright 2025 Cowboy AI, LLC.

//! Resource Graph
//!
//! The fully resolved, cross-referenced set of planned entities a compile run
//! hands to the provisioning engine, plus the named outputs exposed to
//! callers and the partial creation order the engine must honor.

use crate::plan::{
    AssociationPlan, GatewayPlan, NaclPlan, NatPlan, NetworkPlan, RouteTablePlan,
    SecurityGroupPlan, SubnetPlan,
};
use crate::value_objects::{ResourceHandle, Tier};
use serde::{Deserialize, Serialize};

/// The route tables of the topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTables {
    /// Default route to the internet gateway; always created
    pub public: RouteTablePlan,
    /// Default route to the NAT gateway; present iff the NAT path is
    pub private: Option<RouteTablePlan>,
}

/// Per-tier security groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroups {
    pub public: SecurityGroupPlan,
    pub private: SecurityGroupPlan,
}

/// Per-tier network ACLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nacls {
    pub public: NaclPlan,
    pub private: NaclPlan,
}

/// Complete planned topology
///
/// Ownership is hierarchical: the network owns the gateway, subnets, route
/// tables, and security artifacts; route tables own their associations. The
/// graph is a value; nothing in it is shared or mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGraph {
    /// Region the compile run targeted
    pub region: String,
    pub network: NetworkPlan,
    pub gateway: GatewayPlan,
    pub public_subnets: Vec<SubnetPlan>,
    pub private_subnets: Vec<SubnetPlan>,
    /// Present iff the private tier is non-empty
    pub nat: Option<NatPlan>,
    pub route_tables: RouteTables,
    pub associations: Vec<AssociationPlan>,
    pub security_groups: SecurityGroups,
    pub nacls: Nacls,
}

impl ResourceGraph {
    /// Subnets of one tier, in index order
    pub fn subnets(&self, tier: Tier) -> &[SubnetPlan] {
        match tier {
            Tier::Public => &self.public_subnets,
            Tier::Private => &self.private_subnets,
        }
    }

    /// Named outputs exposed to callers
    ///
    /// Subnet sequences match [`SubnetPlan`] index order.
    pub fn outputs(&self) -> TopologyOutputs {
        TopologyOutputs {
            network: self.network.handle.clone(),
            public_subnets: self
                .public_subnets
                .iter()
                .map(|subnet| subnet.handle.clone())
                .collect(),
            private_subnets: self
                .private_subnets
                .iter()
                .map(|subnet| subnet.handle.clone())
                .collect(),
            public_security_group: self.security_groups.public.handle.clone(),
            private_security_group: self.security_groups.private.handle.clone(),
            public_nacl: self.nacls.public.handle.clone(),
            private_nacl: self.nacls.private.handle.clone(),
        }
    }

    /// Partial creation order for the provisioning engine
    ///
    /// Each stage depends on every stage before it; handles within one stage
    /// have no edges between them and may be created in parallel. Stages that
    /// would be empty (no NAT path, no subnets) are omitted.
    pub fn creation_stages(&self) -> Vec<Vec<ResourceHandle>> {
        let mut stages = vec![vec![self.network.handle.clone()]];

        let mut carriers = vec![self.gateway.handle.clone()];
        carriers.extend(self.public_subnets.iter().map(|s| s.handle.clone()));
        carriers.extend(self.private_subnets.iter().map(|s| s.handle.clone()));
        stages.push(carriers);

        if let Some(nat) = &self.nat {
            stages.push(vec![nat.eip.handle.clone()]);
            stages.push(vec![nat.handle.clone()]);
        }

        let mut tables = vec![self.route_tables.public.handle.clone()];
        if let Some(private) = &self.route_tables.private {
            tables.push(private.handle.clone());
        }
        stages.push(tables);

        if !self.associations.is_empty() {
            stages.push(
                self.associations
                    .iter()
                    .map(|association| association.handle.clone())
                    .collect(),
            );
        }

        stages.push(vec![
            self.security_groups.public.handle.clone(),
            self.security_groups.private.handle.clone(),
            self.nacls.public.handle.clone(),
            self.nacls.private.handle.clone(),
        ]);

        stages
    }
}

/// Named outputs of a compile run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyOutputs {
    pub network: ResourceHandle,
    pub public_subnets: Vec<ResourceHandle>,
    pub private_subnets: Vec<ResourceHandle>,
    pub public_security_group: ResourceHandle,
    pub private_security_group: ResourceHandle,
    pub public_nacl: ResourceHandle,
    pub private_nacl: ResourceHandle,
}
