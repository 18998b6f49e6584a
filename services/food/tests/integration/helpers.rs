use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::{Duration, Utc};
use uuid::Uuid;

use reelbite_domain::id::{FoodId, PartnerId, UserId};
use reelbite_domain::price::Price;
use reelbite_domain::relation::{RelationKind, ToggleOutcome};
use reelbite_food::domain::repository::{
    FoodRepository, MediaStorage, PartnerRepository, RelationRepository,
};
use reelbite_food::domain::types::{Food, FoodWithPartner, Partner};
use reelbite_food::error::FoodServiceError;

// ── InMemoryStore ────────────────────────────────────────────────────────────

struct RelationRow {
    user_id: UserId,
    food_id: FoodId,
    kind: RelationKind,
    seq: u64,
}

#[derive(Default)]
struct Tables {
    foods: Vec<Food>,
    relations: Vec<RelationRow>,
    partners: Vec<Partner>,
    seq: u64,
}

/// Shared in-memory tables. Every operation runs under one lock, which gives
/// the same all-or-nothing toggle the database transaction provides.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn with_partner(partner: Partner) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().partners.push(partner);
        store
    }

    pub fn insert_food(&self, food: Food) {
        self.tables.lock().unwrap().foods.push(food);
    }

    /// Stores a relation row and leaves the food's counters alone, so a
    /// counter can start out lower than the number of rows.
    pub fn insert_relation(&self, kind: RelationKind, user_id: UserId, food_id: FoodId) {
        let mut tables = self.tables.lock().unwrap();
        tables.seq += 1;
        let seq = tables.seq;
        tables.relations.push(RelationRow {
            user_id,
            food_id,
            kind,
            seq,
        });
    }

    pub fn food(&self, id: FoodId) -> Option<Food> {
        self.tables
            .lock()
            .unwrap()
            .foods
            .iter()
            .find(|f| f.id == id)
            .cloned()
    }

    /// Number of stored relation rows of `kind` for `food_id`.
    pub fn relation_count(&self, food_id: FoodId, kind: RelationKind) -> i64 {
        self.tables
            .lock()
            .unwrap()
            .relations
            .iter()
            .filter(|r| r.food_id == food_id && r.kind == kind)
            .count() as i64
    }
}

impl FoodRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Food>, FoodServiceError> {
        let mut foods = self.tables.lock().unwrap().foods.clone();
        foods.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(foods)
    }

    async fn find_by_id(&self, id: FoodId) -> Result<Option<Food>, FoodServiceError> {
        Ok(self.food(id))
    }

    async fn find_with_partner(
        &self,
        id: FoodId,
    ) -> Result<Option<FoodWithPartner>, FoodServiceError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.foods.iter().find(|f| f.id == id).map(|food| {
            let partner_name = tables
                .partners
                .iter()
                .find(|p| p.id == food.food_partner_id)
                .map(|p| p.name.clone());
            FoodWithPartner {
                food: food.clone(),
                partner_name,
            }
        }))
    }

    async fn list_by_partner(&self, partner_id: PartnerId) -> Result<Vec<Food>, FoodServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .foods
            .iter()
            .filter(|f| f.food_partner_id == partner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, food: &Food) -> Result<(), FoodServiceError> {
        self.insert_food(food.clone());
        Ok(())
    }

    async fn delete(&self, id: FoodId) -> Result<bool, FoodServiceError> {
        let mut tables = self.tables.lock().unwrap();
        tables.relations.retain(|r| r.food_id != id);
        let before = tables.foods.len();
        tables.foods.retain(|f| f.id != id);
        Ok(tables.foods.len() != before)
    }
}

impl RelationRepository for InMemoryStore {
    async fn toggle(
        &self,
        kind: RelationKind,
        user_id: UserId,
        food_id: FoodId,
    ) -> Result<Option<ToggleOutcome>, FoodServiceError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(food_idx) = tables.foods.iter().position(|f| f.id == food_id) else {
            return Ok(None);
        };
        let existing = tables
            .relations
            .iter()
            .position(|r| r.user_id == user_id && r.food_id == food_id && r.kind == kind);
        let active = match existing {
            Some(idx) => {
                tables.relations.remove(idx);
                false
            }
            None => {
                tables.seq += 1;
                let seq = tables.seq;
                tables.relations.push(RelationRow {
                    user_id,
                    food_id,
                    kind,
                    seq,
                });
                true
            }
        };
        let food = &mut tables.foods[food_idx];
        let counter = match kind {
            RelationKind::Like => &mut food.like_count,
            RelationKind::Save => &mut food.saves_count,
        };
        *counter = if active { *counter + 1 } else { (*counter - 1).max(0) };
        Ok(Some(ToggleOutcome {
            active,
            count: *counter,
        }))
    }

    async fn list_saved(&self, user_id: UserId) -> Result<Vec<Food>, FoodServiceError> {
        let tables = self.tables.lock().unwrap();
        let mut saved: Vec<&RelationRow> = tables
            .relations
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == RelationKind::Save)
            .collect();
        saved.sort_by(|a, b| b.seq.cmp(&a.seq));
        Ok(saved
            .into_iter()
            .filter_map(|r| tables.foods.iter().find(|f| f.id == r.food_id).cloned())
            .collect())
    }
}

impl PartnerRepository for InMemoryStore {
    async fn find_by_id(&self, id: PartnerId) -> Result<Option<Partner>, FoodServiceError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .partners
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

// ── MockStorage ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockStorage {
    pub uploads: Arc<Mutex<Vec<String>>>,
}

impl MediaStorage for MockStorage {
    async fn upload(
        &self,
        file_name: &str,
        _content_type: Option<&str>,
        _bytes: Bytes,
    ) -> Result<String, FoodServiceError> {
        self.uploads.lock().unwrap().push(file_name.to_owned());
        Ok(format!("https://ik.test/reels/{file_name}"))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_partner() -> Partner {
    Partner {
        id: PartnerId(Uuid::parse_str("00000000-0000-0000-0000-0000000000a1").unwrap()),
        name: "Spice Route".to_owned(),
        contact_name: "Asha".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        email: "kitchen@spiceroute.test".to_owned(),
        address: "12 MG Road".to_owned(),
    }
}

/// A food item created `age_minutes` ago with zeroed counters.
pub fn test_food(partner_id: PartnerId, name: &str, age_minutes: i64) -> Food {
    Food {
        id: FoodId(Uuid::now_v7()),
        name: name.to_owned(),
        description: format!("{name} fresh from the tandoor"),
        price: Price::new(199.0).unwrap(),
        video_url: format!("https://ik.test/reels/{name}.mp4"),
        food_partner_id: partner_id,
        like_count: 0,
        saves_count: 0,
        created_at: Utc::now() - Duration::minutes(age_minutes),
    }
}

pub fn user() -> UserId {
    UserId(Uuid::now_v7())
}
