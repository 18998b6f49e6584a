use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

const X_REQUEST_ID: &str = "x-request-id";

/// Origins always allowed for local frontend development.
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build the request-id layer. Apply with `.layer(request_id_layer())` in router.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeUuidRequestId)
}

/// Collect the allowed CORS origins: the dev origins, `frontend_url`, and a
/// comma-separated `additional` list. Blank entries are skipped.
pub fn allowed_origins(frontend_url: Option<&str>, additional: Option<&str>) -> Vec<String> {
    let mut origins: Vec<String> = DEV_ORIGINS.iter().map(|o| (*o).to_owned()).collect();
    let extra = frontend_url
        .into_iter()
        .chain(additional.into_iter().flat_map(|list| list.split(',')))
        .map(str::trim)
        .filter(|o| !o.is_empty());
    for origin in extra {
        let origin = origin.trim_end_matches('/').to_owned();
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }
    origins
}

/// Credentialed CORS for the browser client. Only listed origins are echoed back.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Wrap a service router with the shared layers: request id, tracing, CORS.
pub fn apply_common_layers(router: Router, origins: &[String]) -> Router {
    router
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            X_REQUEST_ID,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
        .layer(request_id_layer())
}
