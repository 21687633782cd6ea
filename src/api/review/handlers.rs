use crate::api::models::*;
use crate::composer::{REVIEWERS, compose};
use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::info;

pub async fn reviews_handler(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Response, AppError> {
    let (stars1, stars2) = match &state.ratings {
        Some(client) => {
            let ratings = client.product_ratings(&product_id).await?;
            (
                ratings.stars_for(REVIEWERS[0].0),
                ratings.stars_for(REVIEWERS[1].0),
            )
        }
        None => (None, None),
    };

    info!(product_id = %product_id, ?stars1, ?stars2, "Serving reviews");

    json_response(&compose(&product_id, stars1, stars2, &state.star_color))
}
