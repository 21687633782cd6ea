use super::RatingsError;
use serde::Deserialize;
use std::collections::HashMap;

/// Payload returned by `GET /ratings/{productId}` on the ratings service
#[derive(Debug, Clone, Deserialize)]
pub struct RatingResponse {
    #[serde(default)]
    pub id: i64,
    pub ratings: HashMap<String, i64>,
}

impl RatingResponse {
    pub fn decode(bytes: &[u8]) -> Result<Self, RatingsError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Stars given by `reviewer`, or `None` when the ratings service did not
    /// score them. Negative values count as unscored.
    pub fn stars_for(&self, reviewer: &str) -> Option<u32> {
        self.ratings
            .get(reviewer)
            .and_then(|&stars| u32::try_from(stars).ok())
    }
}
