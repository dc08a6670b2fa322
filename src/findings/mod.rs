pub mod api;
pub mod aws;

pub use api::{BoxError, FindingClient};
pub use aws::AwsFindingClient;
