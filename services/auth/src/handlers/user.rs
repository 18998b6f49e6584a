use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use reelbite_auth_types::cookie::{clear_session_cookie, set_session_cookie};

use crate::domain::types::UserAccount;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::user::{LoginInput, LoginUserUseCase, RegisterUserInput, RegisterUserUseCase};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct UserBody {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

impl From<UserAccount> for UserBody {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            full_name: account.full_name,
        }
    }
}

#[derive(Serialize)]
pub struct UserSessionResponse {
    pub message: &'static str,
    pub user: UserBody,
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /api/auth/user/register ─────────────────────────────────────────────

pub async fn register_user(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<UserSessionResponse>), AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::MissingData("body"))?;
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let session = usecase
        .execute(RegisterUserInput {
            full_name: body.full_name,
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_session_cookie(jar, session.token.clone(), state.cookie_secure);
    Ok((
        StatusCode::CREATED,
        jar,
        Json(UserSessionResponse {
            message: "user registered successfully",
            user: session.account.into(),
            token: session.token,
        }),
    ))
}

// ── POST /api/auth/user/login ────────────────────────────────────────────────

pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<UserSessionResponse>), AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::MissingData("body"))?;
    let usecase = LoginUserUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_session_cookie(jar, session.token.clone(), state.cookie_secure);
    Ok((
        StatusCode::OK,
        jar,
        Json(UserSessionResponse {
            message: "user logged in successfully",
            user: session.account.into(),
            token: session.token,
        }),
    ))
}

// ── GET /api/auth/user/logout ────────────────────────────────────────────────

pub async fn logout_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, CookieJar, Json<MessageResponse>) {
    (
        StatusCode::OK,
        clear_session_cookie(jar, state.cookie_secure),
        Json(MessageResponse {
            message: "user logged out successfully",
        }),
    )
}
