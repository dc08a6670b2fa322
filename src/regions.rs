//! Static partition metadata for region enumeration.
//!
//! The sweep walks every region of every known partition. The table is
//! compiled in rather than fetched, so enumeration never fails; a region
//! the account cannot reach simply surfaces as a per-region error during
//! the sweep.
//!
//! Snapshot of the published AWS region list as of 2026-08; refresh when
//! new regions launch.

/// A top-level partition grouping of regions.
pub struct Partition {
    pub id: &'static str,
    pub regions: &'static [&'static str],
}

/// All known partitions and their regions.
pub const PARTITIONS: &[Partition] = &[
    Partition {
        id: "aws",
        regions: &[
            "af-south-1",
            "ap-east-1",
            "ap-east-2",
            "ap-northeast-1",
            "ap-northeast-2",
            "ap-northeast-3",
            "ap-south-1",
            "ap-south-2",
            "ap-southeast-1",
            "ap-southeast-2",
            "ap-southeast-3",
            "ap-southeast-4",
            "ap-southeast-5",
            "ap-southeast-7",
            "ca-central-1",
            "ca-west-1",
            "eu-central-1",
            "eu-central-2",
            "eu-north-1",
            "eu-south-1",
            "eu-south-2",
            "eu-west-1",
            "eu-west-2",
            "eu-west-3",
            "il-central-1",
            "me-central-1",
            "me-south-1",
            "mx-central-1",
            "sa-east-1",
            "us-east-1",
            "us-east-2",
            "us-west-1",
            "us-west-2",
        ],
    },
    Partition {
        id: "aws-cn",
        regions: &["cn-north-1", "cn-northwest-1"],
    },
    Partition {
        id: "aws-us-gov",
        regions: &["us-gov-east-1", "us-gov-west-1"],
    },
];

/// Every region identifier across all partitions, in partition table order.
pub fn all_regions() -> Vec<String> {
    PARTITIONS
        .iter()
        .flat_map(|p| p.regions.iter().map(|r| r.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_partition_has_regions() {
        assert!(!PARTITIONS.is_empty());
        for p in PARTITIONS {
            assert!(!p.regions.is_empty(), "partition {} has no regions", p.id);
        }
    }

    #[test]
    fn region_ids_are_unique_across_partitions() {
        let regions = all_regions();
        let unique: HashSet<_> = regions.iter().collect();
        assert_eq!(regions.len(), unique.len());
    }

    #[test]
    fn known_regions_present_in_each_partition() {
        let regions = all_regions();
        assert!(regions.iter().any(|r| r == "us-east-1"));
        assert!(regions.iter().any(|r| r == "cn-north-1"));
        assert!(regions.iter().any(|r| r == "us-gov-west-1"));
    }

    #[test]
    fn recent_region_launches_are_in_the_table() {
        let regions = all_regions();
        assert!(regions.iter().any(|r| r == "ap-east-2"));
        assert!(regions.iter().any(|r| r == "ap-southeast-7"));
        assert!(regions.iter().any(|r| r == "mx-central-1"));
    }
}
