use super::{RatingResponse, RatingsError};
use crate::config::RatingsConfig;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the downstream ratings service
pub struct RatingsClient {
    http: Client,
    base_url: Url,
}

impl RatingsClient {
    pub fn new(config: &RatingsConfig) -> Result<Self, RatingsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let service_url = config.service_url();
        let base_url = Url::parse(&service_url)
            .map_err(|err| RatingsError::InvalidUrl(format!("{service_url}: {err}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base_url}/{product_id}` with the id percent-encoded as one path segment
    fn product_url(&self, product_id: &str) -> Result<Url, RatingsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RatingsError::InvalidUrl(self.base_url.to_string()))?
            .push(product_id);
        Ok(url)
    }

    /// Fetch the raw ratings body for `product_id`.
    ///
    /// The HTTP status is not checked: whatever body comes back is handed to
    /// the decoder, so an error page surfaces as a decode failure.
    pub async fn fetch(&self, product_id: &str) -> Result<Vec<u8>, RatingsError> {
        let url = self.product_url(product_id)?;
        debug!(%url, "Fetching ratings");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Ratings service returned non-success status");
        }

        let body = response.bytes().await?;
        debug!(payload = %String::from_utf8_lossy(&body), "Ratings payload received");

        Ok(body.to_vec())
    }

    /// Fetch and decode the ratings for `product_id`
    pub async fn product_ratings(&self, product_id: &str) -> Result<RatingResponse, RatingsError> {
        let body = self.fetch(product_id).await?;
        let ratings = RatingResponse::decode(&body)?;
        debug!(id = ratings.id, scored = ratings.ratings.len(), "Ratings decoded");
        Ok(ratings)
    }
}
