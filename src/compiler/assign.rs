// Copyright 2025 Cowboy AI, LLC.

//! Subnet Assignment
//!
//! Maps each subnet index of a tier to its CIDR block (positional) and its
//! availability zone (round-robin with wraparound). Assignment is
//! deterministic and order-preserving so re-running on identical inputs is
//! idempotent.

use crate::plan::SubnetPlan;
use crate::spec::{NetworkSpec, SubnetRequest};
use crate::value_objects::{tags_with_name, ResourceHandle, Tier};

/// Produce the subnet plans for one tier
///
/// Indices are dense and zero-based: `cidr = cidrs[i]`,
/// `zone = zones[i mod zones.len()]`, `name = "<prefix>-<tier>-<i>"`.
/// A count of zero yields an empty plan; that is how the absence of a tier
/// is expressed, not an error.
///
/// Callers must have validated the request: `cidrs` covers `count` and
/// `zones` is non-empty.
pub fn assign_subnets(tier: Tier, request: &SubnetRequest, network: &NetworkSpec) -> Vec<SubnetPlan> {
    (0..request.count)
        .map(|index| {
            let handle = ResourceHandle::new(format!("{}-{}-{}", network.name, tier, index));
            SubnetPlan {
                tags: tags_with_name(&network.tags, &handle),
                index,
                tier,
                cidr: request.cidrs[index],
                zone: request.zones[index % request.zones.len()].clone(),
                handle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::TagMap;
    use test_case::test_case;

    fn network(name: &str) -> NetworkSpec {
        NetworkSpec {
            cidr_block: "10.0.0.0/16".parse().unwrap(),
            dns_support: true,
            dns_hostnames: true,
            name: name.to_string(),
            tags: TagMap::new(),
        }
    }

    fn request(count: usize, zones: &[&str]) -> SubnetRequest {
        SubnetRequest {
            count,
            cidrs: (0..count)
                .map(|i| format!("10.0.{i}.0/24").parse().unwrap())
                .collect(),
            zones: zones.iter().map(|z| z.parse().unwrap()).collect(),
        }
    }

    #[test_case(5, &["z1", "z2"], &["z1", "z2", "z1", "z2", "z1"] ; "five subnets wrap two zones")]
    #[test_case(3, &["z1", "z2", "z3"], &["z1", "z2", "z3"] ; "count matches zone count")]
    #[test_case(4, &["z1"], &["z1", "z1", "z1", "z1"] ; "single zone repeats")]
    #[test_case(1, &["z1", "z2", "z3"], &["z1"] ; "fewer subnets than zones")]
    fn test_round_robin_zone_assignment(count: usize, zones: &[&str], expected: &[&str]) {
        let plans = assign_subnets(Tier::Public, &request(count, zones), &network("prod"));

        let assigned: Vec<&str> = plans.iter().map(|p| p.zone.as_str()).collect();
        assert_eq!(assigned, expected);
    }

    #[test]
    fn test_cidrs_are_positional() {
        let plans = assign_subnets(Tier::Public, &request(3, &["z1"]), &network("prod"));

        for (i, plan) in plans.iter().enumerate() {
            assert_eq!(plan.index, i);
            assert_eq!(plan.cidr.to_string(), format!("10.0.{i}.0/24"));
        }
    }

    #[test]
    fn test_names_follow_prefix_tier_index() {
        let plans = assign_subnets(Tier::Private, &request(2, &["z1"]), &network("prod"));

        assert_eq!(plans[0].handle.as_str(), "prod-private-0");
        assert_eq!(plans[1].handle.as_str(), "prod-private-1");
    }

    #[test]
    fn test_zero_count_yields_empty_plan() {
        let plans = assign_subnets(Tier::Private, &request(0, &["z1"]), &network("prod"));
        assert!(plans.is_empty());
    }

    #[test]
    fn test_assignment_is_byte_identical_across_runs() {
        let spec = network("prod");
        let req = request(4, &["z1", "z2", "z3"]);

        let first = assign_subnets(Tier::Public, &req, &spec);
        let second = assign_subnets(Tier::Public, &req, &spec);

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_subnet_tags_carry_name_override() {
        let mut spec = network("prod");
        spec.tags.insert("team".into(), "platform".into());

        let plans = assign_subnets(Tier::Public, &request(1, &["z1"]), &spec);
        assert_eq!(
            plans[0].tags.get("Name"),
            Some(&"prod-public-0".to_string())
        );
        assert_eq!(plans[0].tags.get("team"), Some(&"platform".to_string()));
    }
}
