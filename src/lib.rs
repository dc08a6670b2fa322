//! gdsweep - archive every GuardDuty finding across all AWS partitions and regions.
//!
//! This crate provides functionality to:
//! - Enumerate every region across the known AWS partitions
//! - Discover GuardDuty detectors and their outstanding findings per region
//! - Archive findings in batched requests, isolating failures per region
//!
//! # Example
//!
//! ```no_run
//! use gdsweep::{AwsFindingClient, Sweeper, regions, session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let shared = session::establish("default").await?;
//!     let sweeper = Sweeper::new(AwsFindingClient::new(shared));
//!     sweeper.run(&regions::all_regions()).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod findings;
pub mod regions;
pub mod session;
pub mod sweep;

// Re-export commonly used types at the crate root
pub use error::SweepError;
pub use findings::{AwsFindingClient, FindingClient};
pub use sweep::Sweeper;
