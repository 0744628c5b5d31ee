// Copyright 2025 Cowboy AI, LLC.

//! Wiring Resolution
//!
//! The final stage: builds route tables and their default routes, fans out
//! one association per subnet, emits the static security-group and
//! network-ACL rule sets, and assembles the resource graph. All tag sets are
//! the network-wide tags with a per-resource `Name` override.

use crate::errors::DependencyError;
use crate::graph::{Nacls, ResourceGraph, RouteTables, SecurityGroups};
use crate::plan::{
    AssociationPlan, GatewayPlan, NaclEntry, NaclPlan, NatPlan, NetworkPlan, Protocol, RoutePlan,
    RouteTablePlan, RouteTarget, SecurityGroupPlan, SecurityRule, SubnetPlan,
};
use crate::spec::{NetworkSpec, ProviderConfig};
use crate::value_objects::{tags_with_name, CidrBlock, ResourceHandle, Tier};

/// Source block allowed to reach private-tier instances on port 22
const PRIVATE_SSH_SOURCE: &str = "10.0.0.0/16";

/// Resolve the wired resource graph from the assigned subnets and the
/// conditional NAT path
///
/// The private route table is constructible only from a NAT plan; private
/// subnets without one are a dependency error, not a dangling reference.
pub fn resolve(
    provider: &ProviderConfig,
    spec: &NetworkSpec,
    public: Vec<SubnetPlan>,
    private: Vec<SubnetPlan>,
    nat: Option<NatPlan>,
) -> Result<ResourceGraph, DependencyError> {
    let network = network_plan(spec);
    let gateway = gateway_plan(spec, &network.handle);

    let public_table = route_table(
        spec,
        &network.handle,
        Tier::Public,
        RouteTarget::InternetGateway(gateway.handle.clone()),
    );

    let private_table = match &nat {
        Some(nat) => Some(route_table(
            spec,
            &network.handle,
            Tier::Private,
            RouteTarget::NatGateway(nat.handle.clone()),
        )),
        None if private.is_empty() => None,
        None => return Err(DependencyError::PrivateRouteWithoutNat),
    };

    let mut associations = Vec::with_capacity(public.len() + private.len());
    for subnet in &public {
        associations.push(association(subnet, &public_table.handle));
    }
    if let Some(table) = &private_table {
        for subnet in &private {
            associations.push(association(subnet, &table.handle));
        }
    }

    let security_groups = SecurityGroups {
        public: public_security_group(spec, &network.handle),
        private: private_security_group(spec, &network.handle),
    };
    let nacls = Nacls {
        public: public_nacl(spec, &network.handle),
        private: private_nacl(spec, &network.handle),
    };

    Ok(ResourceGraph {
        region: provider.region.clone(),
        network,
        gateway,
        public_subnets: public,
        private_subnets: private,
        nat,
        route_tables: RouteTables {
            public: public_table,
            private: private_table,
        },
        associations,
        security_groups,
        nacls,
    })
}

fn network_plan(spec: &NetworkSpec) -> NetworkPlan {
    let handle = ResourceHandle::new(format!("{}-vpc", spec.name));
    NetworkPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        cidr_block: spec.cidr_block,
        dns_support: spec.dns_support,
        dns_hostnames: spec.dns_hostnames,
    }
}

fn gateway_plan(spec: &NetworkSpec, network: &ResourceHandle) -> GatewayPlan {
    let handle = ResourceHandle::new(format!("{}-igw", spec.name));
    GatewayPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        network: network.clone(),
    }
}

fn route_table(
    spec: &NetworkSpec,
    network: &ResourceHandle,
    tier: Tier,
    target: RouteTarget,
) -> RouteTablePlan {
    let handle = ResourceHandle::new(format!("{}-{}-rt", spec.name, tier));
    RouteTablePlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        tier,
        network: network.clone(),
        default_route: RoutePlan {
            destination: CidrBlock::anywhere(),
            target,
        },
    }
}

fn association(subnet: &SubnetPlan, table: &ResourceHandle) -> AssociationPlan {
    AssociationPlan {
        handle: ResourceHandle::new(format!("{}-rta", subnet.handle)),
        subnet: subnet.handle.clone(),
        route_table: table.clone(),
        tier: subnet.tier,
    }
}

fn restricted_block() -> CidrBlock {
    PRIVATE_SSH_SOURCE
        .parse()
        .expect("statically valid CIDR literal")
}

fn public_security_group(spec: &NetworkSpec, network: &ResourceHandle) -> SecurityGroupPlan {
    let handle = ResourceHandle::new(format!("{}-public-sg", spec.name));
    SecurityGroupPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        tier: Tier::Public,
        network: network.clone(),
        description: "HTTP and HTTPS from anywhere".to_string(),
        ingress: vec![
            SecurityRule::tcp(80, CidrBlock::anywhere()),
            SecurityRule::tcp(443, CidrBlock::anywhere()),
        ],
        egress: vec![SecurityRule::all_traffic(CidrBlock::anywhere())],
    }
}

fn private_security_group(spec: &NetworkSpec, network: &ResourceHandle) -> SecurityGroupPlan {
    let handle = ResourceHandle::new(format!("{}-private-sg", spec.name));
    SecurityGroupPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        tier: Tier::Private,
        network: network.clone(),
        description: "SSH from the restricted block".to_string(),
        ingress: vec![SecurityRule::tcp(22, restricted_block())],
        egress: vec![SecurityRule::all_traffic(CidrBlock::anywhere())],
    }
}

fn public_nacl(spec: &NetworkSpec, network: &ResourceHandle) -> NaclPlan {
    let handle = ResourceHandle::new(format!("{}-public-nacl", spec.name));
    NaclPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        tier: Tier::Public,
        network: network.clone(),
        entries: vec![
            NaclEntry::allow(100, Protocol::Tcp, 80, 80, CidrBlock::anywhere(), false),
            NaclEntry::allow(110, Protocol::Tcp, 443, 443, CidrBlock::anywhere(), false),
            NaclEntry::allow(100, Protocol::All, 0, 65535, CidrBlock::anywhere(), true),
        ],
    }
}

fn private_nacl(spec: &NetworkSpec, network: &ResourceHandle) -> NaclPlan {
    let handle = ResourceHandle::new(format!("{}-private-nacl", spec.name));
    NaclPlan {
        tags: tags_with_name(&spec.tags, &handle),
        handle,
        tier: Tier::Private,
        network: network.clone(),
        entries: vec![
            NaclEntry::allow(100, Protocol::Tcp, 22, 22, restricted_block(), false),
            NaclEntry::allow(100, Protocol::All, 0, 65535, CidrBlock::anywhere(), true),
        ],
    }
}
