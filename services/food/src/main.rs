use sea_orm::Database;
use tracing::info;

use reelbite_auth_types::identity::SessionKey;
use reelbite_core::middleware::allowed_origins;
use reelbite_core::tracing::init_tracing;
use reelbite_food::config::FoodConfig;
use reelbite_food::infra::storage::ImageKitStorage;
use reelbite_food::router::build_router;
use reelbite_food::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = FoodConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        session_key: SessionKey::new(config.jwt_secret),
        storage: ImageKitStorage {
            client: reqwest::Client::new(),
            upload_url: config.media_upload_url,
            private_key: config.media_private_key,
            folder: config.media_folder,
        },
    };

    let origins = allowed_origins(
        config.frontend_url.as_deref(),
        config.additional_origins.as_deref(),
    );
    let router = build_router(state, &origins, config.max_upload_bytes);
    let addr = format!("0.0.0.0:{}", config.food_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(allowed_origins = ?origins, "food service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
