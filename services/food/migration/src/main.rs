use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(reelbite_food_migration::Migrator).await;
}
