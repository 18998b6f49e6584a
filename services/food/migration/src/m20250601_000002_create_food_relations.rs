use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodRelations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FoodRelations::UserId).uuid().not_null())
                    .col(ColumnDef::new(FoodRelations::FoodId).uuid().not_null())
                    .col(ColumnDef::new(FoodRelations::Kind).small_integer().not_null())
                    .col(
                        ColumnDef::new(FoodRelations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FoodRelations::UserId)
                            .col(FoodRelations::FoodId)
                            .col(FoodRelations::Kind),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FoodRelations::Table, FoodRelations::FoodId)
                            .to(Foods::Table, Foods::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Saved-foods listing: WHERE user_id = $1 AND kind = 1 ORDER BY created_at DESC
        manager
            .create_index(
                Index::create()
                    .table(FoodRelations::Table)
                    .col(FoodRelations::UserId)
                    .col(FoodRelations::Kind)
                    .col(FoodRelations::CreatedAt)
                    .name("idx_food_relations_user_kind_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FoodRelations::Table)
                    .col(FoodRelations::FoodId)
                    .name("idx_food_relations_food_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodRelations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FoodRelations {
    Table,
    UserId,
    FoodId,
    Kind,
    CreatedAt,
}

#[derive(Iden)]
enum Foods {
    Table,
    Id,
}
