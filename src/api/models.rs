use crate::config::AppConfig;
use crate::ratings::{RatingsClient, RatingsError};
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// `None` when ratings integration is disabled
    pub ratings: Option<Arc<RatingsClient>>,
    pub star_color: Arc<str>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, RatingsError> {
        let ratings = if config.ratings.enabled {
            Some(Arc::new(RatingsClient::new(&config.ratings)?))
        } else {
            None
        };

        Ok(Self {
            ratings,
            star_color: Arc::from(config.reviews.star_color.as_str()),
        })
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Star rating attached to a review. Exactly one of a score or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Scored { stars: u32, color: String },
    Unavailable { error: String },
}

impl Rating {
    pub fn stars(&self) -> u32 {
        match self {
            Rating::Scored { stars, .. } => *stars,
            Rating::Unavailable { .. } => 0,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Rating::Scored { color, .. } => color,
            Rating::Unavailable { .. } => "",
        }
    }

    pub fn error(&self) -> &str {
        match self {
            Rating::Scored { .. } => "",
            Rating::Unavailable { error } => error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub reviewer: String,
    pub text: String,
    pub rating: Rating,
}

/// Reviews for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub reviews: [Review; 2],
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ratings(#[from] RatingsError),

    #[error("failed to encode response: {0}")]
    Encoding(serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Serialize `value` into a `200 application/json` response
pub fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(AppError::Encoding)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
