use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: info for everything, plus HTTP
/// request spans from tower-http.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Initialize structured JSON stdout tracing. Call once at service startup.
///
/// Later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
