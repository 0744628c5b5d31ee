// Copyright 2025 Cowboy AI, LLC.

//! Conditional NAT Planning
//!
//! The NAT path (Elastic IP + NAT gateway) exists iff the private tier is
//! non-empty. It is a single shared pair regardless of how many private
//! subnets exist; the per-zone alternative is deliberately not planned here.

use crate::errors::DependencyError;
use crate::plan::{EipPlan, NatPlan, SubnetPlan};
use crate::spec::NetworkSpec;
use crate::value_objects::{tags_with_name, ResourceHandle};

/// Plan the NAT path for the topology
///
/// Only the private-tier count decides presence: zero private subnets means
/// no EIP and no gateway, not an empty placeholder. When present, the
/// gateway anchors to the first public subnet; an empty public tier alongside
/// private subnets is a dependency error, never a silent default.
pub fn plan_nat_path(
    network: &NetworkSpec,
    public: &[SubnetPlan],
    private: &[SubnetPlan],
) -> Result<Option<NatPlan>, DependencyError> {
    if private.is_empty() {
        return Ok(None);
    }

    let anchor = public.first().ok_or(DependencyError::NatAnchorMissing)?;

    let eip_handle = ResourceHandle::new(format!("{}-nat-eip", network.name));
    let nat_handle = ResourceHandle::new(format!("{}-nat", network.name));

    Ok(Some(NatPlan {
        eip: EipPlan {
            tags: tags_with_name(&network.tags, &eip_handle),
            handle: eip_handle,
        },
        subnet: anchor.handle.clone(),
        tags: tags_with_name(&network.tags, &nat_handle),
        handle: nat_handle,
    }))
}
