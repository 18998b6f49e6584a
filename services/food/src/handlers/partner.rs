use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use reelbite_auth_types::identity::{AnyIdentity, PartnerIdentity};
use reelbite_domain::id::PartnerId;

use crate::domain::types::Partner;
use crate::error::FoodServiceError;
use crate::handlers::food::FoodResponse;
use crate::state::AppState;
use crate::usecase::partner::{GetPartnerProfileUseCase, GetPartnerUseCase};

#[derive(Serialize)]
pub struct PartnerResponse {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<Partner> for PartnerResponse {
    fn from(p: Partner) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            contact_name: p.contact_name,
            phone: p.phone,
            email: p.email,
            address: p.address,
        }
    }
}

// ── GET /api/food-partner/me ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PartnerMeResponse {
    pub message: &'static str,
    pub food_partner: PartnerResponse,
}

impl From<Partner> for PartnerMeResponse {
    fn from(partner: Partner) -> Self {
        Self {
            message: "current food partner fetched successfully",
            food_partner: partner.into(),
        }
    }
}

pub async fn get_partner_me(
    identity: PartnerIdentity,
    State(state): State<AppState>,
) -> Result<Json<PartnerMeResponse>, FoodServiceError> {
    let usecase = GetPartnerUseCase {
        partners: state.partner_repo(),
    };
    let partner = usecase.execute(identity.partner_id).await?;
    Ok(Json(partner.into()))
}

// ── GET /api/food-partner/{id} ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct PartnerProfileBody {
    #[serde(flatten)]
    pub partner: PartnerResponse,
    pub food_items: Vec<FoodResponse>,
}

#[derive(Serialize)]
pub struct PartnerProfileResponse {
    pub message: &'static str,
    pub food_partner: PartnerProfileBody,
}

pub async fn get_partner_by_id(
    _identity: AnyIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PartnerProfileResponse>, FoodServiceError> {
    let id: PartnerId = id.trim().parse().map_err(|_| FoodServiceError::InvalidId)?;
    let usecase = GetPartnerProfileUseCase {
        partners: state.partner_repo(),
        foods: state.food_repo(),
    };
    let profile = usecase.execute(id).await?;
    Ok(Json(PartnerProfileResponse {
        message: "food partner fetched successfully",
        food_partner: PartnerProfileBody {
            partner: profile.partner.into(),
            food_items: profile.foods.into_iter().map(FoodResponse::from).collect(),
        },
    }))
}
