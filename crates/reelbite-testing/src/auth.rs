//! Mock session helpers for router tests.
//!
//! Services validate the `token` cookie themselves. In tests, `MockSession`
//! signs a real session token with a test secret so requests pass the identity
//! extractors without going through the auth service.

use axum::http::{HeaderName, HeaderValue, header};
use uuid::Uuid;

use reelbite_auth_types::cookie::SESSION_COOKIE;
use reelbite_auth_types::token::issue_session_token;
use reelbite_domain::account::AccountKind;

/// Secret shared by `MockSession` and the test service state.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockSession {
    pub account_id: Uuid,
    pub kind: AccountKind,
}

impl MockSession {
    pub fn user(account_id: Uuid) -> Self {
        Self {
            account_id,
            kind: AccountKind::User,
        }
    }

    pub fn partner(account_id: Uuid) -> Self {
        Self {
            account_id,
            kind: AccountKind::FoodPartner,
        }
    }

    /// Signed token valid for one hour.
    pub fn token(&self) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600;
        issue_session_token(self.account_id, self.kind, exp, TEST_JWT_SECRET).unwrap()
    }

    /// `Cookie` header as the browser would send it.
    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let value = format!("{SESSION_COOKIE}={}", self.token());
        (header::COOKIE, HeaderValue::from_str(&value).unwrap())
    }
}
