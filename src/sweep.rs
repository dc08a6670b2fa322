//! The sweep: one sequential pass over every region, archiving all
//! outstanding GuardDuty findings.
//!
//! Regions are processed one at a time and independently. A region-level
//! failure is reported and swallowed here so it can never prevent archiving
//! in any other region. There are no retries; the whole sweep is idempotent
//! at the remote service level and can simply be re-run.

use crate::error::SweepError;
use crate::findings::FindingClient;

/// GuardDuty caps ArchiveFindings at 50 finding ids per request.
pub const ARCHIVE_BATCH_LIMIT: usize = 50;

/// Per-region outcome, used for the result line only.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionReport {
    pub detectors: usize,
    pub findings_archived: usize,
}

pub struct Sweeper<C> {
    client: C,
}

impl<C: FindingClient> Sweeper<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run one full pass over `regions`, printing a result line per region.
    /// Region errors are reported and swallowed; the sweep always finishes.
    pub async fn run(&self, regions: &[String]) {
        for region in regions {
            match self.archive_region(region).await {
                Ok(report) => println!(
                    "* {} checked ({} detectors, {} findings archived)",
                    region, report.detectors, report.findings_archived
                ),
                Err(e) => eprintln!("* {} failed: {}", region, e),
            }
        }
    }

    /// Archive all outstanding findings for every detector in one region.
    ///
    /// A finding-discovery failure aborts the whole region pass, matching
    /// the detector-discovery behavior; the next sweep picks the region up
    /// again from scratch.
    pub async fn archive_region(&self, region: &str) -> Result<RegionReport, SweepError> {
        let detector_ids = self
            .client
            .list_detectors(region)
            .await
            .map_err(|e| SweepError::detector_discovery(region, e))?;

        let mut findings_archived = 0;
        for detector_id in &detector_ids {
            let finding_ids = self
                .client
                .list_findings(region, detector_id)
                .await
                .map_err(|e| SweepError::finding_discovery(region, detector_id, e))?;

            // An empty batch is still a valid request; the remote treats
            // it as a no-op.
            if finding_ids.is_empty() {
                self.client
                    .archive_findings(region, detector_id, &[])
                    .await
                    .map_err(|e| SweepError::archive_submission(region, detector_id, e))?;
                continue;
            }

            for chunk in finding_ids.chunks(ARCHIVE_BATCH_LIMIT) {
                self.client
                    .archive_findings(region, detector_id, chunk)
                    .await
                    .map_err(|e| SweepError::archive_submission(region, detector_id, e))?;
                findings_archived += chunk.len();
            }
        }

        Ok(RegionReport {
            detectors: detector_ids.len(),
            findings_archived,
        })
    }
}
