/// Food service configuration loaded from environment variables.
#[derive(Debug)]
pub struct FoodConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret shared with the auth service for session tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3000). Env var: `FOOD_PORT`.
    pub food_port: u16,
    /// Media upload endpoint. Env var: `IMAGEKIT_UPLOAD_URL`.
    pub media_upload_url: String,
    /// Media storage private key. Env var: `IMAGEKIT_PRIVATE_KEY`.
    pub media_private_key: String,
    /// Destination folder for uploaded videos (default "/reels").
    pub media_folder: String,
    /// Largest accepted upload body in bytes (default 100 MiB).
    pub max_upload_bytes: usize,
    /// Production frontend origin, added to the CORS allow-list.
    pub frontend_url: Option<String>,
    /// Comma-separated extra CORS origins.
    pub additional_origins: Option<String>,
}

const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

impl FoodConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            food_port: std::env::var("FOOD_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            media_upload_url: std::env::var("IMAGEKIT_UPLOAD_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_owned()),
            media_private_key: std::env::var("IMAGEKIT_PRIVATE_KEY")
                .expect("IMAGEKIT_PRIVATE_KEY"),
            media_folder: std::env::var("IMAGEKIT_FOLDER").unwrap_or_else(|_| "/reels".to_owned()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::router::DEFAULT_UPLOAD_LIMIT),
            frontend_url: std::env::var("FRONTEND_URL").ok(),
            additional_origins: std::env::var("ADDITIONAL_ORIGINS").ok(),
        }
    }
}
