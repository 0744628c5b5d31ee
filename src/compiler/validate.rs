// Copyright 2025 Cowboy AI, LLC.

//! Parameter Validation
//!
//! Shape-consistency checks on the raw request. This stage runs before every
//! other stage; downstream stages assume validated input and do not re-check
//! bounds. No side effects.

use crate::errors::ConfigurationError;
use crate::spec::{SubnetRequest, TopologyRequest};
use crate::value_objects::Tier;

/// Validate the complete request, naming the offending field on failure
pub fn validate_request(request: &TopologyRequest) -> Result<(), ConfigurationError> {
    if request.network.name.is_empty() {
        return Err(ConfigurationError::EmptyNamePrefix);
    }
    validate_tier(Tier::Public, &request.public)?;
    validate_tier(Tier::Private, &request.private)?;
    Ok(())
}

fn validate_tier(tier: Tier, request: &SubnetRequest) -> Result<(), ConfigurationError> {
    if request.cidrs.len() < request.count {
        return Err(ConfigurationError::InsufficientCidrs {
            tier,
            count: request.count,
            available: request.cidrs.len(),
        });
    }
    if request.zones.is_empty() {
        return Err(ConfigurationError::NoAvailabilityZones { tier });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::NetworkSpec;
    use crate::value_objects::TagMap;

    fn request(name: &str, public: SubnetRequest, private: SubnetRequest) -> TopologyRequest {
        TopologyRequest {
            network: NetworkSpec {
                cidr_block: "10.0.0.0/16".parse().unwrap(),
                dns_support: true,
                dns_hostnames: true,
                name: name.to_string(),
                tags: TagMap::new(),
            },
            public,
            private,
        }
    }

    fn tier(count: usize, cidr_count: usize, zone_count: usize) -> SubnetRequest {
        SubnetRequest {
            count,
            cidrs: (0..cidr_count)
                .map(|i| format!("10.0.{i}.0/24").parse().unwrap())
                .collect(),
            zones: (0..zone_count)
                .map(|i| format!("z{i}").parse().unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = request("prod", tier(2, 2, 2), tier(0, 0, 1));
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_insufficient_cidrs_names_the_tier() {
        let request = request("prod", tier(2, 2, 2), tier(3, 1, 2));
        assert_eq!(
            validate_request(&request),
            Err(ConfigurationError::InsufficientCidrs {
                tier: Tier::Private,
                count: 3,
                available: 1,
            })
        );
    }

    #[test]
    fn test_empty_zone_list_is_rejected() {
        let request = request("prod", tier(1, 1, 0), tier(0, 0, 1));
        assert_eq!(
            validate_request(&request),
            Err(ConfigurationError::NoAvailabilityZones { tier: Tier::Public })
        );
    }

    #[test]
    fn test_empty_name_prefix_is_rejected() {
        let request = request("", tier(1, 1, 1), tier(0, 0, 1));
        assert_eq!(
            validate_request(&request),
            Err(ConfigurationError::EmptyNamePrefix)
        );
    }

    #[test]
    fn test_surplus_cidrs_are_allowed() {
        // More CIDRs than count is fine; extras are ignored by assignment.
        let request = request("prod", tier(1, 4, 1), tier(0, 0, 1));
        assert!(validate_request(&request).is_ok());
    }
}
