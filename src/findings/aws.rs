use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_guardduty::{Client, config::Region, error::DisplayErrorContext};

use super::api::{BoxError, FindingClient};

/// GuardDuty-backed implementation of [`FindingClient`].
///
/// Holds the shared config once and derives a region-scoped client per call;
/// GuardDuty detectors and findings are regional resources.
pub struct AwsFindingClient {
    shared: SdkConfig,
}

impl AwsFindingClient {
    pub fn new(shared: SdkConfig) -> Self {
        Self { shared }
    }

    fn regional_client(&self, region: &str) -> Client {
        let conf = aws_sdk_guardduty::config::Builder::from(&self.shared)
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(conf)
    }
}

#[async_trait]
impl FindingClient for AwsFindingClient {
    async fn list_detectors(&self, region: &str) -> Result<Vec<String>, BoxError> {
        let client = self.regional_client(region);
        let mut pages = client.list_detectors().into_paginator().send();
        let mut detector_ids = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| DisplayErrorContext(e).to_string())?;
            detector_ids.extend(page.detector_ids().iter().cloned());
        }

        Ok(detector_ids)
    }

    async fn list_findings(
        &self,
        region: &str,
        detector_id: &str,
    ) -> Result<Vec<String>, BoxError> {
        let client = self.regional_client(region);
        let mut pages = client
            .list_findings()
            .detector_id(detector_id)
            .into_paginator()
            .send();
        let mut finding_ids = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| DisplayErrorContext(e).to_string())?;
            finding_ids.extend(page.finding_ids().iter().cloned());
        }

        Ok(finding_ids)
    }

    async fn archive_findings(
        &self,
        region: &str,
        detector_id: &str,
        finding_ids: &[String],
    ) -> Result<(), BoxError> {
        let client = self.regional_client(region);
        client
            .archive_findings()
            .detector_id(detector_id)
            .set_finding_ids(Some(finding_ids.to_vec()))
            .send()
            .await
            .map_err(|e| DisplayErrorContext(e).to_string())?;
        Ok(())
    }
}
