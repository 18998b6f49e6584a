use reelbite_domain::id::PartnerId;

use crate::domain::repository::{FoodRepository, PartnerRepository};
use crate::domain::types::{Partner, PartnerProfile};
use crate::error::FoodServiceError;

// ── GetPartner (@me) ─────────────────────────────────────────────────────────

pub struct GetPartnerUseCase<P: PartnerRepository> {
    pub partners: P,
}

impl<P: PartnerRepository> GetPartnerUseCase<P> {
    pub async fn execute(&self, id: PartnerId) -> Result<Partner, FoodServiceError> {
        self.partners
            .find_by_id(id)
            .await?
            .ok_or(FoodServiceError::PartnerNotFound)
    }
}

// ── GetPartnerProfile ────────────────────────────────────────────────────────

pub struct GetPartnerProfileUseCase<P: PartnerRepository, F: FoodRepository> {
    pub partners: P,
    pub foods: F,
}

impl<P: PartnerRepository, F: FoodRepository> GetPartnerProfileUseCase<P, F> {
    pub async fn execute(&self, id: PartnerId) -> Result<PartnerProfile, FoodServiceError> {
        let partner = self
            .partners
            .find_by_id(id)
            .await?
            .ok_or(FoodServiceError::PartnerNotFound)?;
        let foods = self.foods.list_by_partner(id).await?;
        Ok(PartnerProfile { partner, foods })
    }
}
