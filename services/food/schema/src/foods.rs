use sea_orm::entity::prelude::*;

/// One uploaded food reel.
/// `like_count` / `saves_count` mirror the number of `food_relations` rows per kind.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub video_url: String,
    #[sea_orm(indexed)]
    pub food_partner_id: Uuid,
    pub like_count: i64,
    pub saves_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food_partners::Entity",
        from = "Column::FoodPartnerId",
        to = "super::food_partners::Column::Id"
    )]
    FoodPartner,
    #[sea_orm(has_many = "super::food_relations::Entity")]
    FoodRelations,
}

impl Related<super::food_partners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodPartner.def()
    }
}

impl Related<super::food_relations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodRelations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
