#![allow(async_fn_in_trait)]

use bytes::Bytes;

use reelbite_domain::id::{FoodId, PartnerId, UserId};
use reelbite_domain::relation::{RelationKind, ToggleOutcome};

use crate::domain::types::{Food, FoodWithPartner, Partner};
use crate::error::FoodServiceError;

/// Repository for food items.
pub trait FoodRepository: Send + Sync {
    /// All food items, newest first.
    async fn list(&self) -> Result<Vec<Food>, FoodServiceError>;

    async fn find_by_id(&self, id: FoodId) -> Result<Option<Food>, FoodServiceError>;

    async fn find_with_partner(
        &self,
        id: FoodId,
    ) -> Result<Option<FoodWithPartner>, FoodServiceError>;

    /// Food items owned by `partner_id`, newest first.
    async fn list_by_partner(&self, partner_id: PartnerId) -> Result<Vec<Food>, FoodServiceError>;

    async fn create(&self, food: &Food) -> Result<(), FoodServiceError>;

    /// Delete the item and its relation records. Returns `true` if a row was deleted.
    async fn delete(&self, id: FoodId) -> Result<bool, FoodServiceError>;
}

/// Like/save relations and their denormalized counters.
pub trait RelationRepository: Send + Sync {
    /// Flip the relation for (`user_id`, `food_id`) and adjust the matching
    /// counter atomically. Returns `None` if the food item does not exist.
    async fn toggle(
        &self,
        kind: RelationKind,
        user_id: UserId,
        food_id: FoodId,
    ) -> Result<Option<ToggleOutcome>, FoodServiceError>;

    /// Food items the user has saved, most recent save first.
    async fn list_saved(&self, user_id: UserId) -> Result<Vec<Food>, FoodServiceError>;
}

/// Read access to partner accounts.
pub trait PartnerRepository: Send + Sync {
    async fn find_by_id(&self, id: PartnerId) -> Result<Option<Partner>, FoodServiceError>;
}

/// Object storage for uploaded videos.
pub trait MediaStorage: Send + Sync {
    /// Store `bytes` under `file_name` and return the public URL.
    async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<String, FoodServiceError>;
}
