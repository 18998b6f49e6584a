use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("missing data: {0}")]
    MissingData(&'static str),
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("password must be at most {0} bytes")]
    PasswordTooLong(usize),
    #[error("account already exists")]
    AccountAlreadyExists,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingData(_) => "MISSING_DATA",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordTooShort(_) => "PASSWORD_TOO_SHORT",
            Self::PasswordTooLong(_) => "PASSWORD_TOO_LONG",
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingData(_)
            | Self::InvalidEmail
            | Self::PasswordTooShort(_)
            | Self::PasswordTooLong(_)
            | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::AccountAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are already visible in the TraceLayer span; only 500s carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
