//! Topology compiler for a reusable cloud-network stack
//!
//! Compiles a handful of parameters into a consistent, fully cross-referenced
//! [`ResourceGraph`]: one virtual network, public and private subnet tiers
//! spread across availability zones, an internet gateway, a conditional NAT
//! path, route tables, security groups, and network ACLs.
//!
//! The compiler is a pure function: no I/O, no retained state, deterministic
//! output. Applying the graph to a cloud provider is the job of a downstream
//! provisioning engine, which must honor the partial creation order reported
//! by [`ResourceGraph::creation_stages`].
//!
//! # Example
//!
//! ```rust
//! use vpc_topology::{compile, NetworkSpec, ProviderConfig, SubnetRequest, TopologyRequest};
//!
//! let request = TopologyRequest {
//!     network: NetworkSpec {
//!         cidr_block: "10.0.0.0/16".parse().unwrap(),
//!         dns_support: true,
//!         dns_hostnames: true,
//!         name: "prod".to_string(),
//!         tags: Default::default(),
//!     },
//!     public: SubnetRequest {
//!         count: 2,
//!         cidrs: vec!["10.0.1.0/24".parse().unwrap(), "10.0.2.0/24".parse().unwrap()],
//!         zones: vec!["us-west-2a".parse().unwrap(), "us-west-2b".parse().unwrap()],
//!     },
//!     private: SubnetRequest {
//!         count: 0,
//!         cidrs: vec![],
//!         zones: vec!["us-west-2a".parse().unwrap()],
//!     },
//! };
//!
//! let graph = compile(&ProviderConfig::default(), &request).unwrap();
//! assert_eq!(graph.public_subnets.len(), 2);
//! assert!(graph.nat.is_none());
//! ```

pub mod compiler;
pub mod errors;
pub mod graph;
pub mod plan;
pub mod spec;
pub mod value_objects;

// Re-export commonly used types
pub use compiler::compile;
pub use errors::{CompileError, CompileResult, ConfigurationError, DependencyError};
pub use graph::{Nacls, ResourceGraph, RouteTables, SecurityGroups, TopologyOutputs};
pub use spec::{NetworkSpec, ProviderConfig, SubnetRequest, TopologyRequest};
pub use value_objects::{AvailabilityZone, CidrBlock, ResourceHandle, TagMap, Tier};
