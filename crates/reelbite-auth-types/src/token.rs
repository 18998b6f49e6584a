//! Session-token (JWT) issue and validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

use reelbite_domain::account::AccountKind;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub account_id: Uuid,
    pub kind: AccountKind,
    pub exp: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token creation (auth service) and validation
/// (every service behind the session cookie).
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | account ID (UUID string) |
/// | `kind` | custom | `"user"` or `"food_partner"` |
/// | `exp` | `exp` | seconds since epoch |
///
/// [`Serialize`] requires the **`USE_ONLY_IN_AUTH_SERVICE`** cargo feature:
/// the auth service is the sole token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test), derive(Serialize))]
pub struct SessionClaims {
    pub sub: String,
    pub kind: AccountKind,
    pub exp: u64,
}

/// Decode and validate a JWT, returning raw claims.
///
/// HS256, `exp` checked with the default 60s leeway, required claims `exp` + `sub`.
fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a session-cookie value, returning the parsed identity.
pub fn validate_session_token(token: &str, secret: &str) -> Result<Session, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let account_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(Session {
        account_id,
        kind: claims.kind,
        exp: claims.exp,
    })
}

/// Sign a session token for `account_id` expiring at `exp` (seconds since epoch).
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn issue_session_token(
    account_id: Uuid,
    kind: AccountKind,
    exp: u64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: account_id.to_string(),
        kind,
        exp,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}
