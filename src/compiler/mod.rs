// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Compiler
//!
//! Pure pipeline turning a topology request into a resource graph:
//!
//! ```text
//! validate → assign → plan NAT → resolve wiring
//! ```
//!
//! Each stage consumes the immutable output of its predecessor and produces a
//! new immutable value. The pipeline runs exactly once per invocation, never
//! partially: any stage error aborts the whole compile, so a partially valid
//! graph is never emitted. No stage performs I/O or reads engine state.

pub mod assign;
pub mod nat;
pub mod validate;
pub mod wiring;

use crate::errors::CompileResult;
use crate::graph::ResourceGraph;
use crate::spec::{ProviderConfig, TopologyRequest};
use crate::value_objects::Tier;
use tracing::{debug, info};

/// Compile a topology request into a fully wired resource graph
///
/// Deterministic: identical inputs always produce an identical graph.
pub fn compile(provider: &ProviderConfig, request: &TopologyRequest) -> CompileResult<ResourceGraph> {
    validate::validate_request(request)?;
    debug!(prefix = %request.network.name, "validated topology request");

    let public = assign::assign_subnets(Tier::Public, &request.public, &request.network);
    let private = assign::assign_subnets(Tier::Private, &request.private, &request.network);
    debug!(
        public = public.len(),
        private = private.len(),
        "assigned subnets"
    );

    let nat = nat::plan_nat_path(&request.network, &public, &private)?;
    debug!(nat = nat.is_some(), "planned conditional NAT path");

    let graph = wiring::resolve(provider, &request.network, public, private, nat)?;
    info!(
        region = %graph.region,
        subnets = graph.public_subnets.len() + graph.private_subnets.len(),
        nat = graph.nat.is_some(),
        "compiled topology"
    );

    Ok(graph)
}
