//! Session establishment and caller identity.
//!
//! The authenticated context is built once from the chosen profile and
//! passed by parameter into the sweep, so repeated or parallel invocations
//! never share hidden state.

use aws_config::SdkConfig;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_sdk_sts::config::{ProvideCredentials, Region};

use crate::error::{Result, SweepError};
use crate::findings::BoxError;

/// Load shared AWS config for a profile.
///
/// The region here only anchors non-regional calls (STS); the sweep overrides
/// it per region. Credentials are resolved eagerly so a missing or broken
/// profile fails fatally here, before any region is processed, instead of
/// surfacing as an error in every region.
pub async fn establish(profile: &str) -> Result<SdkConfig> {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));

    let credentials_provider = ProfileFileCredentialsProvider::builder()
        .profile_name(profile)
        .build();

    let shared = aws_config::from_env()
        .region(region_provider)
        .profile_name(profile)
        .credentials_provider(credentials_provider)
        .load()
        .await;

    let provider = shared
        .credentials_provider()
        .ok_or_else(|| SweepError::session("no credentials provider configured"))?;
    provider.provide_credentials().await.map_err(|e| {
        SweepError::session(format!(
            "no credentials resolved for profile '{}': {}",
            profile, e
        ))
    })?;

    Ok(shared)
}

/// Resolve the caller identity for the informational startup print.
///
/// Failures here are not part of the sweep's error taxonomy; the caller
/// reports them and proceeds.
pub async fn caller_identity(shared: &SdkConfig) -> std::result::Result<String, BoxError> {
    let client = aws_sdk_sts::Client::new(shared);
    let resp = client
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| aws_sdk_sts::error::DisplayErrorContext(e).to_string())?;

    Ok(format!(
        "account: {}\narn: {}\nuser id: {}",
        resp.account().unwrap_or("unknown"),
        resp.arn().unwrap_or("unknown"),
        resp.user_id().unwrap_or("unknown"),
    ))
}
