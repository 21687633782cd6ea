pub mod client;
pub mod models;

pub use client::RatingsClient;
pub use models::RatingResponse;

use thiserror::Error;

/// Failures talking to the downstream ratings service
#[derive(Debug, Error)]
pub enum RatingsError {
    #[error("ratings service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid ratings service url {0}")]
    InvalidUrl(String),

    #[error("malformed ratings payload: {0}")]
    Decode(#[from] serde_json::Error),
}
