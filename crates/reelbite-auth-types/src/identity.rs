//! Session-cookie identity extractors.
//!
//! Each service state exposes its JWT secret as a [`SessionKey`] via
//! `FromRef`; the extractors read the `token` cookie, validate it, and check
//! the account kind. Any failure is rejected with `401 UNAUTHORIZED`.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::CookieJar;
use http::request::Parts;
use uuid::Uuid;

use reelbite_core::error::AppError;
use reelbite_domain::account::AccountKind;
use reelbite_domain::id::{PartnerId, UserId};

use crate::cookie::SESSION_COOKIE;
use crate::token::{Session, validate_session_token};

/// HMAC secret used to validate session tokens.
#[derive(Clone)]
pub struct SessionKey(pub Arc<str>);

impl SessionKey {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Authenticated customer.
#[derive(Debug, Clone, Copy)]
pub struct UserIdentity {
    pub user_id: UserId,
}

/// Authenticated food partner.
#[derive(Debug, Clone, Copy)]
pub struct PartnerIdentity {
    pub partner_id: PartnerId,
}

/// Any authenticated account, user or partner.
#[derive(Debug, Clone, Copy)]
pub struct AnyIdentity {
    pub account_id: Uuid,
    pub kind: AccountKind,
}

fn session_from_parts(parts: &Parts, key: &SessionKey) -> Result<Session, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;
    validate_session_token(token.value(), &key.0).map_err(|e| {
        tracing::debug!(error = %e, "rejected session token");
        AppError::Unauthorized
    })
}

// axum-core 0.5 defines `from_request_parts` as `fn -> impl Future + Send`. Validation is
// synchronous, so do it up front and return a 'static ready future.
impl<S> FromRequestParts<S> for AnyIdentity
where
    S: Send + Sync,
    SessionKey: FromRef<S>,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = session_from_parts(parts, &SessionKey::from_ref(state)).map(|s| Self {
            account_id: s.account_id,
            kind: s.kind,
        });
        std::future::ready(result)
    }
}

impl<S> FromRequestParts<S> for UserIdentity
where
    S: Send + Sync,
    SessionKey: FromRef<S>,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = session_from_parts(parts, &SessionKey::from_ref(state)).and_then(|s| {
            match s.kind {
                AccountKind::User => Ok(Self {
                    user_id: UserId(s.account_id),
                }),
                AccountKind::FoodPartner => Err(AppError::Unauthorized),
            }
        });
        std::future::ready(result)
    }
}

impl<S> FromRequestParts<S> for PartnerIdentity
where
    S: Send + Sync,
    SessionKey: FromRef<S>,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = session_from_parts(parts, &SessionKey::from_ref(state)).and_then(|s| {
            match s.kind {
                AccountKind::FoodPartner => Ok(Self {
                    partner_id: PartnerId(s.account_id),
                }),
                AccountKind::User => Err(AppError::Unauthorized),
            }
        });
        std::future::ready(result)
    }
}
