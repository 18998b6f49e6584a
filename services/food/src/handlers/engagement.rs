use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use reelbite_auth_types::identity::UserIdentity;
use reelbite_domain::relation::{RelationKind, ToggleOutcome};

use crate::error::FoodServiceError;
use crate::handlers::food::{FoodResponse, parse_food_id};
use crate::state::AppState;
use crate::usecase::engagement::{ListSavedFoodsUseCase, ToggleRelationUseCase};

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub food_id: String,
}

/// 201 when the relation was just created, 200 when it was removed.
fn toggle_status(outcome: &ToggleOutcome) -> StatusCode {
    if outcome.active {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

async fn toggle(
    kind: RelationKind,
    identity: UserIdentity,
    state: &AppState,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<ToggleOutcome, FoodServiceError> {
    let Json(body) = body.map_err(|_| FoodServiceError::MissingData)?;
    let food_id = parse_food_id(&body.food_id)?;
    let usecase = ToggleRelationUseCase {
        repo: state.relation_repo(),
    };
    usecase.execute(kind, identity.user_id, food_id).await
}

// ── POST /api/food/like ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LikeResponse {
    pub message: &'static str,
    pub like: bool,
    pub like_count: i64,
}

pub async fn like_food(
    identity: UserIdentity,
    State(state): State<AppState>,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LikeResponse>), FoodServiceError> {
    let outcome = toggle(RelationKind::Like, identity, &state, body).await?;
    let message = if outcome.active {
        "food liked successfully"
    } else {
        "food unliked successfully"
    };
    Ok((
        toggle_status(&outcome),
        Json(LikeResponse {
            message,
            like: outcome.active,
            like_count: outcome.count,
        }),
    ))
}

// ── POST /api/food/save ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SaveResponse {
    pub message: &'static str,
    pub save: bool,
    pub saves_count: i64,
}

pub async fn save_food(
    identity: UserIdentity,
    State(state): State<AppState>,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), FoodServiceError> {
    let outcome = toggle(RelationKind::Save, identity, &state, body).await?;
    let message = if outcome.active {
        "food saved successfully"
    } else {
        "food unsaved successfully"
    };
    Ok((
        toggle_status(&outcome),
        Json(SaveResponse {
            message,
            save: outcome.active,
            saves_count: outcome.count,
        }),
    ))
}

// ── GET /api/food/save ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SavedFoodsResponse {
    pub message: &'static str,
    pub saved_foods: Vec<FoodResponse>,
}

pub async fn get_saved_foods(
    identity: UserIdentity,
    State(state): State<AppState>,
) -> Result<Json<SavedFoodsResponse>, FoodServiceError> {
    let usecase = ListSavedFoodsUseCase {
        repo: state.relation_repo(),
    };
    let foods = usecase.execute(identity.user_id).await?;
    Ok(Json(SavedFoodsResponse {
        message: "saved foods fetched successfully",
        saved_foods: foods.into_iter().map(FoodResponse::from).collect(),
    }))
}
