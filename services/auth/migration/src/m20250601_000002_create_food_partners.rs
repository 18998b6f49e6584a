use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodPartners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodPartners::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodPartners::Name).string().not_null())
                    .col(ColumnDef::new(FoodPartners::ContactName).string().not_null())
                    .col(ColumnDef::new(FoodPartners::Phone).string().not_null())
                    .col(
                        ColumnDef::new(FoodPartners::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FoodPartners::Address).text().not_null())
                    .col(ColumnDef::new(FoodPartners::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(FoodPartners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodPartners::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FoodPartners {
    Table,
    Id,
    Name,
    ContactName,
    Phone,
    Email,
    Address,
    PasswordHash,
    CreatedAt,
}
