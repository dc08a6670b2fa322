//! Integration tests for the gdsweep library.
//!
//! These tests verify the public API works correctly without touching AWS.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use gdsweep::cli::resolve_profile;
use gdsweep::findings::BoxError;
use gdsweep::{FindingClient, SweepError, Sweeper, regions};

#[test]
fn test_region_enumeration_covers_all_partitions() {
    let all = regions::all_regions();

    // One entry per region, every partition represented.
    let total: usize = regions::PARTITIONS.iter().map(|p| p.regions.len()).sum();
    assert_eq!(all.len(), total);
    assert!(all.contains(&"us-east-1".to_string()));
    assert!(all.contains(&"cn-northwest-1".to_string()));
    assert!(all.contains(&"us-gov-east-1".to_string()));
}

#[test]
fn test_error_display_is_operator_readable() {
    let e = SweepError::finding_discovery("ap-south-1", "det-42", "timed out");
    let msg = e.to_string();
    assert!(msg.contains("ap-south-1"));
    assert!(msg.contains("det-42"));
}

#[test]
fn test_profile_resolution_order() {
    assert_eq!(resolve_profile(Some("ops"), Some("dev")), "ops");
    assert_eq!(resolve_profile(None, Some("dev")), "dev");
    assert_eq!(resolve_profile(None, None), "default");
}

/// A client with a single detector everywhere, recording archive batches.
struct StubClient {
    archived: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

#[async_trait]
impl FindingClient for StubClient {
    async fn list_detectors(&self, _region: &str) -> Result<Vec<String>, BoxError> {
        Ok(vec!["detector".to_string()])
    }

    async fn list_findings(
        &self,
        region: &str,
        _detector_id: &str,
    ) -> Result<Vec<String>, BoxError> {
        Ok(vec![format!("{}-finding", region)])
    }

    async fn archive_findings(
        &self,
        region: &str,
        _detector_id: &str,
        finding_ids: &[String],
    ) -> Result<(), BoxError> {
        self.archived
            .lock()
            .unwrap()
            .push((region.to_string(), finding_ids.to_vec()));
        Ok(())
    }
}

#[tokio::test]
async fn test_sweep_visits_every_enumerated_region() {
    let archived = Arc::new(Mutex::new(Vec::new()));
    let sweeper = Sweeper::new(StubClient {
        archived: archived.clone(),
    });
    let all = regions::all_regions();

    sweeper.run(&all).await;

    let recorded = archived.lock().unwrap();
    assert_eq!(recorded.len(), all.len());
    for region in &all {
        assert!(
            recorded
                .iter()
                .any(|(r, ids)| r == region && ids == &vec![format!("{}-finding", region)]),
            "region {} was not swept",
            region
        );
    }
}
