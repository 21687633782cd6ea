pub mod models;
pub mod review;

// Re-exports
pub use models::*;

use axum::{Router, http::StatusCode, response::Response, routing::get};
use tower_http::trace::TraceLayer;

/// Build the service's route table. Unknown paths fall through to 404 and
/// non-GET methods on known paths get 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler).head(method_not_allowed))
        .merge(review::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// axum serves HEAD from GET handlers unless a HEAD route is set; routes are GET only
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

pub async fn health_handler() -> Result<Response, AppError> {
    json_response(&HealthResponse {
        status: "Reviews is healthy".to_string(),
    })
}
