use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
};
use serde::Serialize;

use reelbite_auth_types::identity::{AnyIdentity, PartnerIdentity};
use reelbite_domain::id::FoodId;

use crate::domain::types::{Food, VideoUpload};
use crate::error::FoodServiceError;
use crate::state::AppState;
use crate::usecase::food::{
    CreateFoodInput, CreateFoodUseCase, DeleteFoodUseCase, GetFoodUseCase, ListFoodsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FoodResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub video_url: String,
    pub food_partner_id: String,
    pub like_count: i64,
    pub saves_count: i64,
    #[serde(serialize_with = "reelbite_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        Self {
            id: food.id.to_string(),
            name: food.name,
            description: food.description,
            price: food.price.value(),
            video_url: food.video_url,
            food_partner_id: food.food_partner_id.to_string(),
            like_count: food.like_count,
            saves_count: food.saves_count,
            created_at: food.created_at,
        }
    }
}

pub(crate) fn parse_food_id(raw: &str) -> Result<FoodId, FoodServiceError> {
    raw.parse().map_err(|_| FoodServiceError::InvalidId)
}

// ── POST /api/food ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreateFoodResponse {
    pub message: &'static str,
    pub food: FoodResponse,
    pub food_partner_id: String,
}

pub async fn create_food(
    identity: PartnerIdentity,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<CreateFoodResponse>), FoodServiceError> {
    let multipart = multipart.map_err(|_| FoodServiceError::MissingData)?;
    let input = read_food_form(multipart).await?;
    let usecase = CreateFoodUseCase {
        repo: state.food_repo(),
        storage: state.storage.clone(),
    };
    let food = usecase.execute(identity.partner_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateFoodResponse {
            message: "food created successfully",
            food: food.into(),
            food_partner_id: identity.partner_id.to_string(),
        }),
    ))
}

/// Collect the `name`, `description`, `price` and `video` fields. Unknown fields are skipped.
async fn read_food_form(mut multipart: Multipart) -> Result<CreateFoodInput, FoodServiceError> {
    let mut input = CreateFoodInput {
        name: None,
        description: None,
        price: None,
        video: None,
    };
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| FoodServiceError::MissingData)?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "video" => {
                let original_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| FoodServiceError::MissingVideo)?;
                input.video = Some(VideoUpload {
                    original_name,
                    content_type,
                    bytes,
                });
            }
            "name" | "description" | "price" => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| FoodServiceError::MissingData)?;
                match name.as_str() {
                    "name" => input.name = Some(text),
                    "description" => input.description = Some(text),
                    _ => input.price = Some(text),
                }
            }
            _ => {}
        }
    }
    Ok(input)
}

// ── GET /api/food ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FoodListResponse {
    pub message: &'static str,
    pub food: Vec<FoodResponse>,
}

pub async fn list_foods(
    _identity: AnyIdentity,
    State(state): State<AppState>,
) -> Result<Json<FoodListResponse>, FoodServiceError> {
    let usecase = ListFoodsUseCase {
        repo: state.food_repo(),
    };
    let foods = usecase.execute().await?;
    Ok(Json(FoodListResponse {
        message: "food items fetched successfully",
        food: foods.into_iter().map(FoodResponse::from).collect(),
    }))
}

// ── GET /api/food/{id} ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FoodDetail {
    #[serde(flatten)]
    pub food: FoodResponse,
    pub partner_name: Option<String>,
}

#[derive(Serialize)]
pub struct FoodDetailResponse {
    pub message: &'static str,
    pub food: FoodDetail,
}

pub async fn get_food(
    _identity: AnyIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodDetailResponse>, FoodServiceError> {
    let id = parse_food_id(&id)?;
    let usecase = GetFoodUseCase {
        repo: state.food_repo(),
    };
    let found = usecase.execute(id).await?;
    Ok(Json(FoodDetailResponse {
        message: "food item fetched successfully",
        food: FoodDetail {
            food: found.food.into(),
            partner_name: found.partner_name,
        },
    }))
}

// ── DELETE /api/food/{id} ────────────────────────────────────────────────────

pub async fn delete_food(
    identity: PartnerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, FoodServiceError> {
    let id = parse_food_id(&id)?;
    let usecase = DeleteFoodUseCase {
        repo: state.food_repo(),
    };
    usecase.execute(identity.partner_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
