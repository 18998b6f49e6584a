use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, IdenStatic,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
    sea_query::Expr,
};

use reelbite_domain::id::{FoodId, PartnerId, UserId};
use reelbite_domain::price::Price;
use reelbite_domain::relation::{RelationKind, ToggleOutcome};
use reelbite_food_schema::{food_partners, food_relations, foods};

use crate::domain::repository::{FoodRepository, PartnerRepository, RelationRepository};
use crate::domain::types::{Food, FoodWithPartner, Partner};
use crate::error::FoodServiceError;

// ── Food repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFoodRepository {
    pub db: DatabaseConnection,
}

impl FoodRepository for DbFoodRepository {
    async fn list(&self) -> Result<Vec<Food>, FoodServiceError> {
        let models = foods::Entity::find()
            .order_by_desc(foods::Column::CreatedAt)
            .order_by_desc(foods::Column::Id)
            .all(&self.db)
            .await
            .context("list foods")?;
        foods_from_models(models)
    }

    async fn find_by_id(&self, id: FoodId) -> Result<Option<Food>, FoodServiceError> {
        let model = foods::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find food by id")?;
        model.map(food_from_model).transpose()
    }

    async fn find_with_partner(
        &self,
        id: FoodId,
    ) -> Result<Option<FoodWithPartner>, FoodServiceError> {
        let row = foods::Entity::find_by_id(id.0)
            .find_also_related(food_partners::Entity)
            .one(&self.db)
            .await
            .context("find food with partner")?;
        let Some((food, partner)) = row else {
            return Ok(None);
        };
        Ok(Some(FoodWithPartner {
            food: food_from_model(food)?,
            partner_name: partner.map(|p| p.name),
        }))
    }

    async fn list_by_partner(&self, partner_id: PartnerId) -> Result<Vec<Food>, FoodServiceError> {
        let models = foods::Entity::find()
            .filter(foods::Column::FoodPartnerId.eq(partner_id.0))
            .order_by_desc(foods::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list foods by partner")?;
        foods_from_models(models)
    }

    async fn create(&self, food: &Food) -> Result<(), FoodServiceError> {
        foods::ActiveModel {
            id: Set(food.id.0),
            name: Set(food.name.clone()),
            description: Set(food.description.clone()),
            price: Set(food.price.value()),
            video_url: Set(food.video_url.clone()),
            food_partner_id: Set(food.food_partner_id.0),
            like_count: Set(food.like_count),
            saves_count: Set(food.saves_count),
            created_at: Set(food.created_at),
        }
        .insert(&self.db)
        .await
        .context("create food")?;
        Ok(())
    }

    async fn delete(&self, id: FoodId) -> Result<bool, FoodServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    food_relations::Entity::delete_many()
                        .filter(food_relations::Column::FoodId.eq(id.0))
                        .exec(txn)
                        .await?;
                    let res = foods::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(res.rows_affected > 0)
                })
            })
            .await
            .context("delete food")?;
        Ok(deleted)
    }
}

// ── Relation repository (like / save toggle) ─────────────────────────────────

#[derive(Clone)]
pub struct DbRelationRepository {
    pub db: DatabaseConnection,
}

fn counter_column(kind: RelationKind) -> foods::Column {
    match kind {
        RelationKind::Like => foods::Column::LikeCount,
        RelationKind::Save => foods::Column::SavesCount,
    }
}

impl RelationRepository for DbRelationRepository {
    async fn toggle(
        &self,
        kind: RelationKind,
        user_id: UserId,
        food_id: FoodId,
    ) -> Result<Option<ToggleOutcome>, FoodServiceError> {
        let outcome = self
            .db
            .transaction::<_, Option<ToggleOutcome>, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    // SELECT ... FOR UPDATE: toggles of the same food run one at a time.
                    let locked = foods::Entity::find_by_id(food_id.0)
                        .lock_exclusive()
                        .one(txn)
                        .await?;
                    if locked.is_none() {
                        return Ok(None);
                    }

                    let counter = counter_column(kind);
                    let key = (user_id.0, food_id.0, kind.as_i16());
                    let existing = food_relations::Entity::find_by_id(key).one(txn).await?;

                    let active = if existing.is_some() {
                        food_relations::Entity::delete_by_id(key).exec(txn).await?;
                        foods::Entity::update_many()
                            .col_expr(
                                counter,
                                Expr::cust(format!("GREATEST({} - 1, 0)", counter.as_str())),
                            )
                            .filter(foods::Column::Id.eq(food_id.0))
                            .exec(txn)
                            .await?;
                        false
                    } else {
                        food_relations::ActiveModel {
                            user_id: Set(user_id.0),
                            food_id: Set(food_id.0),
                            kind: Set(kind.as_i16()),
                            created_at: Set(Utc::now()),
                        }
                        .insert(txn)
                        .await?;
                        foods::Entity::update_many()
                            .col_expr(counter, Expr::col(counter).add(1))
                            .filter(foods::Column::Id.eq(food_id.0))
                            .exec(txn)
                            .await?;
                        true
                    };

                    let count = foods::Entity::find_by_id(food_id.0)
                        .select_only()
                        .column(counter)
                        .into_tuple::<i64>()
                        .one(txn)
                        .await?
                        .unwrap_or(0);
                    Ok(Some(ToggleOutcome { active, count }))
                })
            })
            .await
            .with_context(|| format!("toggle {kind:?} for food {food_id}"))?;
        Ok(outcome)
    }

    async fn list_saved(&self, user_id: UserId) -> Result<Vec<Food>, FoodServiceError> {
        let models = foods::Entity::find()
            .join(JoinType::InnerJoin, foods::Relation::FoodRelations.def())
            .filter(food_relations::Column::UserId.eq(user_id.0))
            .filter(food_relations::Column::Kind.eq(RelationKind::Save.as_i16()))
            .order_by_desc(food_relations::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list saved foods")?;
        foods_from_models(models)
    }
}

// ── Partner repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPartnerRepository {
    pub db: DatabaseConnection,
}

impl PartnerRepository for DbPartnerRepository {
    async fn find_by_id(&self, id: PartnerId) -> Result<Option<Partner>, FoodServiceError> {
        let model = food_partners::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find food partner by id")?;
        Ok(model.map(|m| Partner {
            id: PartnerId(m.id),
            name: m.name,
            contact_name: m.contact_name,
            phone: m.phone,
            email: m.email,
            address: m.address,
        }))
    }
}

// ── Model mapping ────────────────────────────────────────────────────────────

fn food_from_model(model: foods::Model) -> Result<Food, FoodServiceError> {
    let price = Price::new(model.price)
        .with_context(|| format!("stored price of food {} is invalid", model.id))?;
    Ok(Food {
        id: FoodId(model.id),
        name: model.name,
        description: model.description,
        price,
        video_url: model.video_url,
        food_partner_id: PartnerId(model.food_partner_id),
        like_count: model.like_count,
        saves_count: model.saves_count,
        created_at: model.created_at,
    })
}

fn foods_from_models(models: Vec<foods::Model>) -> Result<Vec<Food>, FoodServiceError> {
    models.into_iter().map(food_from_model).collect()
}
