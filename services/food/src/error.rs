use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use reelbite_domain::price::InvalidPrice;

/// Food service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum FoodServiceError {
    #[error("food item not found")]
    FoodNotFound,
    #[error("food partner not found")]
    PartnerNotFound,
    #[error("no saved foods found")]
    NoSavedFoods,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] InvalidPrice),
    #[error("missing data")]
    MissingData,
    #[error("missing video")]
    MissingVideo,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl FoodServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FoodNotFound => "FOOD_NOT_FOUND",
            Self::PartnerNotFound => "PARTNER_NOT_FOUND",
            Self::NoSavedFoods => "NO_SAVED_FOODS",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidPrice(_) => "INVALID_PRICE",
            Self::MissingData => "MISSING_DATA",
            Self::MissingVideo => "MISSING_VIDEO",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::FoodNotFound | Self::PartnerNotFound | Self::NoSavedFoods => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidId | Self::InvalidPrice(_) | Self::MissingData | Self::MissingVideo => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FoodServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
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
