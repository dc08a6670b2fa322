//! The narrow collaborator interface the sweep consumes.
//!
//! Kept deliberately SDK-agnostic so the orchestrator can be tested against
//! an in-memory implementation. Errors are returned as boxed causes; the
//! sweep wraps them with the failing operation's context.

use async_trait::async_trait;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait FindingClient: Send + Sync {
    /// List the detector ids configured in a region.
    async fn list_detectors(&self, region: &str) -> Result<Vec<String>, BoxError>;

    /// List the finding ids attached to a detector.
    async fn list_findings(
        &self,
        region: &str,
        detector_id: &str,
    ) -> Result<Vec<String>, BoxError>;

    /// Archive a batch of findings for a detector. An empty batch is a
    /// valid no-op request, not an error.
    async fn archive_findings(
        &self,
        region: &str,
        detector_id: &str,
        finding_ids: &[String],
    ) -> Result<(), BoxError>;
}
