//! Runs against a real Postgres when `DATABASE_URL` is set, and is skipped
//! otherwise. Every test creates its own food rows, so a shared scratch
//! database can be reused between runs.

use futures::future::join_all;
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm_migration::MigratorTrait;

use reelbite_domain::id::{FoodId, PartnerId};
use reelbite_domain::relation::{RelationKind, ToggleOutcome};
use reelbite_food::domain::repository::{FoodRepository, RelationRepository};
use reelbite_food::infra::db::{DbFoodRepository, DbRelationRepository};
use reelbite_food_schema::food_relations;

use crate::helpers::{test_food, user};

async fn connect() -> Option<DatabaseConnection> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set, skipping");
        return None;
    };
    let db = Database::connect(&url).await.unwrap();
    reelbite_food_migration::Migrator::up(&db, None).await.unwrap();
    Some(db)
}

async fn seeded_food(db: &DatabaseConnection) -> FoodId {
    let food = test_food(PartnerId(uuid::Uuid::now_v7()), "dal-makhani", 0);
    DbFoodRepository { db: db.clone() }
        .create(&food)
        .await
        .unwrap();
    food.id
}

async fn stored_rows(db: &DatabaseConnection, food_id: FoodId, kind: RelationKind) -> i64 {
    food_relations::Entity::find()
        .filter(food_relations::Column::FoodId.eq(food_id.0))
        .filter(food_relations::Column::Kind.eq(kind.as_i16()))
        .count(db)
        .await
        .unwrap() as i64
}

#[tokio::test]
async fn should_keep_counter_equal_to_rows_under_concurrent_toggles() {
    let Some(db) = connect().await else {
        return;
    };
    let food_id = seeded_food(&db).await;
    let repo = DbRelationRepository { db: db.clone() };
    let users: Vec<_> = (0..16).map(|_| user()).collect();

    let likes = join_all(
        users
            .iter()
            .map(|u| repo.toggle(RelationKind::Like, *u, food_id)),
    )
    .await;
    assert!(likes.iter().all(|r| matches!(r, Ok(Some(o)) if o.active)));

    let unlikes = join_all(
        users[..6]
            .iter()
            .map(|u| repo.toggle(RelationKind::Like, *u, food_id)),
    )
    .await;
    assert!(unlikes.iter().all(|r| matches!(r, Ok(Some(o)) if !o.active)));

    let food = DbFoodRepository { db: db.clone() }
        .find_by_id(food_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(food.like_count, 10);
    assert_eq!(food.saves_count, 0);
    assert_eq!(stored_rows(&db, food_id, RelationKind::Like).await, 10);
}

#[tokio::test]
async fn should_serialize_concurrent_toggles_from_one_user() {
    let Some(db) = connect().await else {
        return;
    };
    let food_id = seeded_food(&db).await;
    let repo = DbRelationRepository { db: db.clone() };
    let u = user();

    let outcomes = join_all((0..7).map(|_| repo.toggle(RelationKind::Save, u, food_id))).await;
    let counts: Vec<i64> = outcomes
        .into_iter()
        .map(|r| r.unwrap().unwrap().count)
        .collect();
    assert!(counts.iter().all(|c| *c == 0 || *c == 1));

    // An odd number of toggles leaves the save in place.
    assert_eq!(stored_rows(&db, food_id, RelationKind::Save).await, 1);
    let outcome = repo.toggle(RelationKind::Save, u, food_id).await.unwrap();
    assert_eq!(
        outcome,
        Some(ToggleOutcome {
            active: false,
            count: 0
        })
    );
}

#[tokio::test]
async fn should_remove_relations_with_deleted_food() {
    let Some(db) = connect().await else {
        return;
    };
    let food_id = seeded_food(&db).await;
    let relations = DbRelationRepository { db: db.clone() };
    relations
        .toggle(RelationKind::Like, user(), food_id)
        .await
        .unwrap();
    relations
        .toggle(RelationKind::Save, user(), food_id)
        .await
        .unwrap();

    let foods = DbFoodRepository { db: db.clone() };
    assert!(foods.delete(food_id).await.unwrap());
    assert!(foods.find_by_id(food_id).await.unwrap().is_none());
    assert_eq!(stored_rows(&db, food_id, RelationKind::Like).await, 0);
    assert_eq!(stored_rows(&db, food_id, RelationKind::Save).await, 0);

    let missing = relations
        .toggle(RelationKind::Like, user(), food_id)
        .await
        .unwrap();
    assert_eq!(missing, None);
}
