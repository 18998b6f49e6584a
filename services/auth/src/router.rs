use axum::{
    Router,
    routing::{get, post},
};

use reelbite_core::health::{healthz, readyz};
use reelbite_core::middleware::apply_common_layers;

use crate::handlers::{
    partner::{login_partner, logout_partner, register_partner},
    user::{login_user, logout_user, register_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState, origins: &[String]) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/api/auth/user/register", post(register_user))
        .route("/api/auth/user/login", post(login_user))
        .route("/api/auth/user/logout", get(logout_user))
        // Food partners
        .route("/api/auth/food-partner/register", post(register_partner))
        .route("/api/auth/food-partner/login", post(login_partner))
        .route("/api/auth/food-partner/logout", get(logout_partner))
        .with_state(state);

    apply_common_layers(router, origins)
}
