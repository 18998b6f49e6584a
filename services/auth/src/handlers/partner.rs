use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use reelbite_auth_types::cookie::{clear_session_cookie, set_session_cookie};

use crate::domain::types::PartnerAccount;
use crate::error::AuthServiceError;
use crate::handlers::user::{LoginRequest, MessageResponse};
use crate::state::AppState;
use crate::usecase::partner::{
    LoginPartnerUseCase, RegisterPartnerInput, RegisterPartnerUseCase,
};
use crate::usecase::user::LoginInput;

#[derive(Deserialize)]
pub struct RegisterPartnerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Serialize)]
pub struct PartnerBody {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<PartnerAccount> for PartnerBody {
    fn from(account: PartnerAccount) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            contact_name: account.contact_name,
            phone: account.phone,
            email: account.email,
            address: account.address,
        }
    }
}

#[derive(Serialize)]
pub struct PartnerSessionResponse {
    pub message: &'static str,
    pub food_partner: PartnerBody,
    pub token: String,
}

// ── POST /api/auth/food-partner/register ─────────────────────────────────────

pub async fn register_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<RegisterPartnerRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<PartnerSessionResponse>), AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::MissingData("body"))?;
    let usecase = RegisterPartnerUseCase {
        repo: state.partner_repo(),
        jwt_secret: state.jwt_secret.clone(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let session = usecase
        .execute(RegisterPartnerInput {
            name: body.name,
            contact_name: body.contact_name,
            phone: body.phone,
            email: body.email,
            password: body.password,
            address: body.address,
        })
        .await?;

    let jar = set_session_cookie(jar, session.token.clone(), state.cookie_secure);
    Ok((
        StatusCode::CREATED,
        jar,
        Json(PartnerSessionResponse {
            message: "food partner registered successfully",
            food_partner: session.account.into(),
            token: session.token,
        }),
    ))
}

// ── POST /api/auth/food-partner/login ────────────────────────────────────────

pub async fn login_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<PartnerSessionResponse>), AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::MissingData("body"))?;
    let usecase = LoginPartnerUseCase {
        repo: state.partner_repo(),
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
        Json(PartnerSessionResponse {
            message: "food partner logged in successfully",
            food_partner: session.account.into(),
            token: session.token,
        }),
    ))
}

// ── GET /api/auth/food-partner/logout ────────────────────────────────────────

pub async fn logout_partner(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, CookieJar, Json<MessageResponse>) {
    (
        StatusCode::OK,
        clear_session_cookie(jar, state.cookie_secure),
        Json(MessageResponse {
            message: "food partner logged out successfully",
        }),
    )
}
