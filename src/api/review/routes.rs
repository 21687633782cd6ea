use crate::api::method_not_allowed;
use crate::api::models::AppState;
use crate::api::review::handlers::reviews_handler;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/reviews/{product_id}",
        get(reviews_handler).head(method_not_allowed),
    )
}
