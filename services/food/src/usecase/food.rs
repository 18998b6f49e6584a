use chrono::Utc;
use uuid::Uuid;

use reelbite_domain::id::{FoodId, PartnerId};
use reelbite_domain::price::Price;

use crate::domain::repository::{FoodRepository, MediaStorage};
use crate::domain::types::{Food, FoodWithPartner, VideoUpload};
use crate::error::FoodServiceError;

// ── CreateFood ───────────────────────────────────────────────────────────────

pub struct CreateFoodInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub video: Option<VideoUpload>,
}

pub struct CreateFoodUseCase<R: FoodRepository, M: MediaStorage> {
    pub repo: R,
    pub storage: M,
}

impl<R: FoodRepository, M: MediaStorage> CreateFoodUseCase<R, M> {
    pub async fn execute(
        &self,
        partner_id: PartnerId,
        input: CreateFoodInput,
    ) -> Result<Food, FoodServiceError> {
        let name = input
            .name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .ok_or(FoodServiceError::MissingData)?;
        let price = Price::from_form_field(input.price.as_deref())?;
        let video = input
            .video
            .filter(|v| !v.bytes.is_empty())
            .ok_or(FoodServiceError::MissingVideo)?;

        // Keep the extension so the CDN serves the right content type.
        let file_name = format!("{}{}", Uuid::now_v7(), video.extension());
        let video_url = self
            .storage
            .upload(&file_name, video.content_type.as_deref(), video.bytes)
            .await?;

        let food = Food {
            id: FoodId(Uuid::now_v7()),
            name,
            description: input.description.unwrap_or_default().trim().to_owned(),
            price,
            video_url,
            food_partner_id: partner_id,
            like_count: 0,
            saves_count: 0,
            created_at: Utc::now(),
        };
        self.repo.create(&food).await?;
        tracing::info!(food_id = %food.id, partner_id = %partner_id, "food created");
        Ok(food)
    }
}

// ── ListFoods ────────────────────────────────────────────────────────────────

pub struct ListFoodsUseCase<R: FoodRepository> {
    pub repo: R,
}

impl<R: FoodRepository> ListFoodsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Food>, FoodServiceError> {
        self.repo.list().await
    }
}

// ── GetFood ──────────────────────────────────────────────────────────────────

pub struct GetFoodUseCase<R: FoodRepository> {
    pub repo: R,
}

impl<R: FoodRepository> GetFoodUseCase<R> {
    pub async fn execute(&self, id: FoodId) -> Result<FoodWithPartner, FoodServiceError> {
        self.repo
            .find_with_partner(id)
            .await?
            .ok_or(FoodServiceError::FoodNotFound)
    }
}

// ── DeleteFood ───────────────────────────────────────────────────────────────

pub struct DeleteFoodUseCase<R: FoodRepository> {
    pub repo: R,
}

impl<R: FoodRepository> DeleteFoodUseCase<R> {
    pub async fn execute(&self, partner_id: PartnerId, id: FoodId) -> Result<(), FoodServiceError> {
        let food = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(FoodServiceError::FoodNotFound)?;
        if food.food_partner_id != partner_id {
            return Err(FoodServiceError::Forbidden);
        }
        if !self.repo.delete(id).await? {
            return Err(FoodServiceError::FoodNotFound);
        }
        tracing::info!(food_id = %id, partner_id = %partner_id, "food deleted");
        Ok(())
    }
}
