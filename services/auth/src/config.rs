/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens. Shared with the food service.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3001). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    /// Mark the session cookie `Secure; SameSite=None` (default true).
    /// Set `COOKIE_SECURE=false` for plain-http local development.
    pub cookie_secure: bool,
    /// bcrypt work factor (default 12). Env var: `BCRYPT_COST`.
    pub bcrypt_cost: u32,
    /// Production frontend origin, added to the CORS allow-list.
    pub frontend_url: Option<String>,
    /// Comma-separated extra CORS origins.
    pub additional_origins: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|v| !matches!(v.as_str(), "false" | "0"))
                .unwrap_or(true),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(bcrypt::DEFAULT_COST),
            frontend_url: std::env::var("FRONTEND_URL").ok(),
            additional_origins: std::env::var("ADDITIONAL_ORIGINS").ok(),
        }
    }
}
