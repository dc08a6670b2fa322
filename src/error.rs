//! Unified error type for gdsweep.
//!
//! All public APIs return `Result<T, SweepError>`. The variants form a closed
//! set tagged with the failing operation, carrying the region (and detector,
//! where one is in scope) as structured fields so callers can branch on kind
//! instead of parsing messages.

use std::fmt;

/// The unified error type for all sweep operations.
#[derive(Debug)]
pub enum SweepError {
    /// Establishing the authenticated session failed. Fatal; aborts the run
    /// before any region is processed.
    Session(String),

    /// Listing detectors for a region failed. Scoped to that region.
    DetectorDiscovery { region: String, message: String },

    /// Listing findings for a detector failed. Scoped to that region.
    FindingDiscovery {
        region: String,
        detector_id: String,
        message: String,
    },

    /// Submitting an archive request failed. Scoped to that region.
    ArchiveSubmission {
        region: String,
        detector_id: String,
        message: String,
    },
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Session(msg) => write!(f, "session error: {}", msg),
            SweepError::DetectorDiscovery { region, message } => {
                write!(f, "on ListDetectors in {}: {}", region, message)
            }
            SweepError::FindingDiscovery {
                region,
                detector_id,
                message,
            } => write!(
                f,
                "on ListFindings in {} (detector {}): {}",
                region, detector_id, message
            ),
            SweepError::ArchiveSubmission {
                region,
                detector_id,
                message,
            } => write!(
                f,
                "on ArchiveFindings in {} (detector {}): {}",
                region, detector_id, message
            ),
        }
    }
}

impl std::error::Error for SweepError {}

// ── Convenience constructors ───────────────────────────────────────────

impl SweepError {
    /// Create a fatal session establishment error.
    pub fn session(message: impl Into<String>) -> Self {
        SweepError::Session(message.into())
    }

    /// Create a detector discovery error for a region.
    pub fn detector_discovery(region: impl Into<String>, cause: impl fmt::Display) -> Self {
        SweepError::DetectorDiscovery {
            region: region.into(),
            message: friendly_aws_message(cause),
        }
    }

    /// Create a finding discovery error for a detector.
    pub fn finding_discovery(
        region: impl Into<String>,
        detector_id: impl Into<String>,
        cause: impl fmt::Display,
    ) -> Self {
        SweepError::FindingDiscovery {
            region: region.into(),
            detector_id: detector_id.into(),
            message: friendly_aws_message(cause),
        }
    }

    /// Create an archive submission error for a detector.
    pub fn archive_submission(
        region: impl Into<String>,
        detector_id: impl Into<String>,
        cause: impl fmt::Display,
    ) -> Self {
        SweepError::ArchiveSubmission {
            region: region.into(),
            detector_id: detector_id.into(),
            message: friendly_aws_message(cause),
        }
    }
}

/// Translate common GuardDuty/AWS error codes into user-friendly messages.
fn friendly_aws_message(e: impl fmt::Display) -> String {
    let msg = e.to_string();

    if msg.contains("AccessDeniedException") {
        "Access denied (check IAM permissions for GuardDuty)".to_string()
    } else if msg.contains("BadRequestException") {
        "Bad request (detector may not exist or the request is malformed)".to_string()
    } else if msg.contains("InternalServerErrorException") {
        "AWS internal error (try again later)".to_string()
    } else if msg.contains("dispatch failure") {
        "Could not reach the GuardDuty endpoint (region may be disabled for this account)"
            .to_string()
    } else {
        msg
    }
}

/// Convenience type alias for Results using SweepError.
pub type Result<T> = std::result::Result<T, SweepError>;
