use sea_orm::Database;
use tracing::info;

use reelbite_auth::config::AuthConfig;
use reelbite_auth::router::build_router;
use reelbite_auth::state::AppState;
use reelbite_core::middleware::allowed_origins;
use reelbite_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        cookie_secure: config.cookie_secure,
        bcrypt_cost: config.bcrypt_cost,
    };

    let origins = allowed_origins(
        config.frontend_url.as_deref(),
        config.additional_origins.as_deref(),
    );
    let router = build_router(state, &origins);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(cookie_secure = config.cookie_secure, "auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
