// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Plan Tool
//!
//! Reads a JSON settings file, compiles the topology, and writes the resolved
//! resource graph to stdout as JSON for a provisioning engine to consume.
//!
//! Run with: cargo run --bin topology-plan -- settings.json
//!
//! The settings path may also come from the TOPOLOGY_SETTINGS environment
//! variable. Exit code is non-zero on configuration or dependency errors,
//! with the offending field named on stderr.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;
use vpc_topology::{compile, ProviderConfig, TopologyRequest};

/// On-disk settings for one compile run
#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default)]
    provider: ProviderConfig,
    topology: TopologyRequest,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TOPOLOGY_SETTINGS").ok())
    {
        Some(path) => path,
        None => bail!("usage: topology-plan <settings.json> (or set TOPOLOGY_SETTINGS)"),
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {path}"))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {path}"))?;
    debug!(path = %path, region = %settings.provider.region, "loaded settings");

    let graph = compile(&settings.provider, &settings.topology)?;

    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}
