use reelbite_domain::id::{FoodId, UserId};
use reelbite_domain::relation::{RelationKind, ToggleOutcome};

use crate::domain::repository::RelationRepository;
use crate::domain::types::Food;
use crate::error::FoodServiceError;

// ── ToggleRelation (like / save) ─────────────────────────────────────────────

pub struct ToggleRelationUseCase<R: RelationRepository> {
    pub repo: R,
}

impl<R: RelationRepository> ToggleRelationUseCase<R> {
    pub async fn execute(
        &self,
        kind: RelationKind,
        user_id: UserId,
        food_id: FoodId,
    ) -> Result<ToggleOutcome, FoodServiceError> {
        let outcome = self
            .repo
            .toggle(kind, user_id, food_id)
            .await?
            .ok_or(FoodServiceError::FoodNotFound)?;
        tracing::debug!(
            ?kind,
            %user_id,
            %food_id,
            active = outcome.active,
            count = outcome.count,
            "relation toggled"
        );
        Ok(outcome)
    }
}

// ── ListSavedFoods ───────────────────────────────────────────────────────────

pub struct ListSavedFoodsUseCase<R: RelationRepository> {
    pub repo: R,
}

impl<R: RelationRepository> ListSavedFoodsUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Food>, FoodServiceError> {
        let foods = self.repo.list_saved(user_id).await?;
        if foods.is_empty() {
            return Err(FoodServiceError::NoSavedFoods);
        }
        Ok(foods)
    }
}
