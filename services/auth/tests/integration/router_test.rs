use axum::http::{StatusCode, header};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use reelbite_auth::router::build_router;
use reelbite_auth::state::AppState;
use reelbite_core::middleware::allowed_origins;

use crate::helpers::{TEST_BCRYPT_COST, TEST_JWT_SECRET};

/// Router over a disconnected database. Validation failures are reported
/// before any query runs.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        cookie_secure: false,
        bcrypt_cost: TEST_BCRYPT_COST,
    };
    TestServer::new(build_router(state, &allowed_origins(None, None))).unwrap()
}

fn set_cookie(resp: &axum_test::TestResponse) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

#[tokio::test]
async fn should_reject_register_without_json_body() {
    let resp = server().post("/api/auth/user/register").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_short_password_on_register() {
    let resp = server()
        .post("/api/auth/user/register")
        .json(&json!({
            "full_name": "Meera Nair",
            "email": "meera@example.com",
            "password": "abc",
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body = resp.json::<Value>();
    assert_eq!(body["kind"], "PASSWORD_TOO_SHORT");
    assert_eq!(body["message"], "password must be at least 6 characters");
}

#[tokio::test]
async fn should_reject_password_past_bcrypt_limit_on_register() {
    let resp = server()
        .post("/api/auth/user/register")
        .json(&json!({
            "full_name": "Meera Nair",
            "email": "meera@example.com",
            "password": "p".repeat(73),
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "PASSWORD_TOO_LONG");
}

#[tokio::test]
async fn should_reject_partner_register_missing_fields() {
    let resp = server()
        .post("/api/auth/food-partner/register")
        .json(&json!({
            "name": "Spice Route",
            "email": "kitchen@spiceroute.test",
            "password": "tandoor!",
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_malformed_login_as_invalid_credentials() {
    let resp = server()
        .post("/api/auth/user/login")
        .json(&json!({ "email": "not-an-email", "password": "paneer123" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn should_clear_session_cookie_on_user_logout() {
    let resp = server().get("/api/auth/user/logout").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>()["message"],
        "user logged out successfully"
    );
    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn should_clear_session_cookie_on_partner_logout() {
    let resp = server().get("/api/auth/food-partner/logout").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
}
