use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use reelbite_auth_types::identity::SessionKey;
use reelbite_core::middleware::allowed_origins;
use reelbite_food::infra::storage::ImageKitStorage;
use reelbite_food::router::{DEFAULT_UPLOAD_LIMIT, build_router};
use reelbite_food::state::AppState;
use reelbite_testing::auth::{MockSession, TEST_JWT_SECRET};

/// Router over a disconnected database. Only requests rejected before any
/// query are meaningful here.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        session_key: SessionKey::new(TEST_JWT_SECRET),
        storage: ImageKitStorage {
            client: reqwest::Client::new(),
            upload_url: "http://127.0.0.1:9/upload".to_owned(),
            private_key: "unused".to_owned(),
            folder: "/reels".to_owned(),
        },
    };
    let origins = allowed_origins(Some("https://reelbite.test"), None);
    TestServer::new(build_router(state, &origins, DEFAULT_UPLOAD_LIMIT)).unwrap()
}

fn user_cookie() -> (HeaderName, HeaderValue) {
    MockSession::user(Uuid::now_v7()).cookie_header()
}

fn partner_cookie() -> (HeaderName, HeaderValue) {
    MockSession::partner(Uuid::now_v7()).cookie_header()
}

#[tokio::test]
async fn should_answer_healthz_with_request_id() {
    let resp = server().get("/healthz").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(id.parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn should_reject_unauthenticated_like() {
    let resp = server()
        .post("/api/food/like")
        .json(&json!({ "food_id": Uuid::now_v7() }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_reject_partner_session_on_like() {
    let (name, value) = partner_cookie();
    let resp = server()
        .post("/api/food/like")
        .add_header(name, value)
        .json(&json!({ "food_id": Uuid::now_v7() }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_food_id_on_like() {
    let (name, value) = user_cookie();
    let resp = server()
        .post("/api/food/like")
        .add_header(name, value)
        .json(&json!({ "food_id": "64f1c2a9e4b0a1b2c3d4e5f6" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_ID");
}

#[tokio::test]
async fn should_reject_save_without_body() {
    let (name, value) = user_cookie();
    let resp = server().post("/api/food/save").add_header(name, value).await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_malformed_food_id_in_path() {
    let (name, value) = user_cookie();
    let resp = server()
        .get("/api/food/not-an-id")
        .add_header(name, value)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_ID");
}

#[tokio::test]
async fn should_require_partner_session_to_create_or_delete() {
    let server = server();

    let (name, value) = user_cookie();
    let resp = server.post("/api/food").add_header(name, value).await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    let (name, value) = user_cookie();
    let resp = server
        .delete(&format!("/api/food/{}", Uuid::now_v7()))
        .add_header(name, value)
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);

    let resp = server.get("/api/food-partner/me").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_create_without_multipart_body() {
    let (name, value) = partner_cookie();
    let resp = server()
        .post("/api/food")
        .add_header(name, value)
        .json(&json!({ "name": "not multipart" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_allow_credentialed_cors_for_frontend_origin() {
    let resp = server()
        .method(Method::OPTIONS, "/api/food")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://reelbite.test"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://reelbite.test"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
