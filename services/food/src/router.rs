use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use reelbite_core::health::{healthz, readyz};
use reelbite_core::middleware::apply_common_layers;

use crate::handlers::{
    engagement::{get_saved_foods, like_food, save_food},
    food::{create_food, delete_food, get_food, list_foods},
    partner::{get_partner_by_id, get_partner_me},
};
use crate::state::AppState;

/// Default cap on multipart upload bodies (100 MiB).
pub const DEFAULT_UPLOAD_LIMIT: usize = 100 * 1024 * 1024;

pub fn build_router(state: AppState, origins: &[String], upload_limit: usize) -> Router {
    let api = Router::new()
        // Food
        .route(
            "/api/food",
            post(create_food)
                .layer(DefaultBodyLimit::max(upload_limit))
                .get(list_foods),
        )
        .route("/api/food/{id}", get(get_food).delete(delete_food))
        // Engagement
        .route("/api/food/like", post(like_food))
        .route("/api/food/save", post(save_food).get(get_saved_foods))
        // Partners
        .route("/api/food-partner/me", get(get_partner_me))
        .route("/api/food-partner/{id}", get(get_partner_by_id));

    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(api)
        .with_state(state);

    apply_common_layers(router, origins)
}
