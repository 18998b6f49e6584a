use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Foods::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Foods::Name).string().not_null())
                    .col(
                        ColumnDef::new(Foods::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Foods::Price)
                            .double()
                            .not_null()
                            .default(0.0)
                            .check(Expr::col(Foods::Price).gte(0.0)),
                    )
                    .col(ColumnDef::new(Foods::VideoUrl).string().not_null())
                    .col(ColumnDef::new(Foods::FoodPartnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Foods::LikeCount)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Foods::LikeCount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Foods::SavesCount)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Foods::SavesCount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Foods::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Foods::Table)
                    .col(Foods::FoodPartnerId)
                    .name("idx_foods_food_partner_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Foods {
    Table,
    Id,
    Name,
    Description,
    Price,
    VideoUrl,
    FoodPartnerId,
    LikeCount,
    SavesCount,
    CreatedAt,
}
