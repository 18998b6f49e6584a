use sea_orm_migration::prelude::*;

mod m20250601_000001_create_foods;
mod m20250601_000002_create_food_relations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Both services migrate the same database; each keeps its own history.
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_food").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_foods::Migration),
            Box::new(m20250601_000002_create_food_relations::Migration),
        ]
    }
}
