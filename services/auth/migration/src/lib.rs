use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_food_partners;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Both services migrate the same database; each keeps its own history.
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_auth").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_food_partners::Migration),
        ]
    }
}
