use bytes::Bytes;
use uuid::Uuid;

use reelbite_domain::id::PartnerId;
use reelbite_domain::relation::RelationKind;
use reelbite_food::domain::types::VideoUpload;
use reelbite_food::error::FoodServiceError;
use reelbite_food::usecase::engagement::ToggleRelationUseCase;
use reelbite_food::usecase::food::{
    CreateFoodInput, CreateFoodUseCase, DeleteFoodUseCase, GetFoodUseCase, ListFoodsUseCase,
};
use reelbite_food::usecase::partner::{GetPartnerProfileUseCase, GetPartnerUseCase};

use crate::helpers::{InMemoryStore, MockStorage, test_food, test_partner, user};

fn reel_input(name: &str, price: &str) -> CreateFoodInput {
    CreateFoodInput {
        name: Some(name.to_owned()),
        description: Some("hot and crisp".to_owned()),
        price: Some(price.to_owned()),
        video: Some(VideoUpload {
            original_name: Some("reel.MOV".to_owned()),
            content_type: Some("video/quicktime".to_owned()),
            bytes: Bytes::from_static(b"moov"),
        }),
    }
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_video_under_uuid_name_with_original_extension() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    let storage = MockStorage::default();
    let uc = CreateFoodUseCase {
        repo: store.clone(),
        storage: storage.clone(),
    };

    let food = uc
        .execute(partner.id, reel_input("Masala Dosa", "89"))
        .await
        .unwrap();

    let uploads = storage.uploads.lock().unwrap();
    let (stem, ext) = uploads[0].split_at(uploads[0].len() - 4);
    assert_eq!(ext, ".MOV");
    assert!(stem.parse::<Uuid>().is_ok());
    assert_eq!(food.video_url, format!("https://ik.test/reels/{}", uploads[0]));
    assert_eq!(store.food(food.id).unwrap(), food);
}

// ── Read ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_foods_newest_first() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    let old = test_food(partner.id, "idli", 60);
    let new = test_food(partner.id, "vada", 1);
    let (old_id, new_id) = (old.id, new.id);
    store.insert_food(old);
    store.insert_food(new);

    let foods = ListFoodsUseCase { repo: store }.execute().await.unwrap();
    let ids: Vec<_> = foods.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![new_id, old_id]);
}

#[tokio::test]
async fn should_get_food_with_partner_name() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    let food = test_food(partner.id, "biryani", 0);
    let id = food.id;
    store.insert_food(food);

    let found = GetFoodUseCase { repo: store }.execute(id).await.unwrap();
    assert_eq!(found.partner_name.as_deref(), Some("Spice Route"));
}

#[tokio::test]
async fn should_return_null_partner_name_for_orphaned_food() {
    let store = InMemoryStore::default();
    let food = test_food(PartnerId(Uuid::now_v7()), "samosa", 0);
    let id = food.id;
    store.insert_food(food);

    let found = GetFoodUseCase { repo: store }.execute(id).await.unwrap();
    assert!(found.partner_name.is_none());
}

// ── Delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_cascade_relations_when_owner_deletes() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    let food = test_food(partner.id, "rasgulla", 0);
    let id = food.id;
    store.insert_food(food);

    let toggle = ToggleRelationUseCase {
        repo: store.clone(),
    };
    for _ in 0..3 {
        let u = user();
        toggle.execute(RelationKind::Like, u, id).await.unwrap();
        toggle.execute(RelationKind::Save, u, id).await.unwrap();
    }
    assert_eq!(store.relation_count(id, RelationKind::Like), 3);

    DeleteFoodUseCase {
        repo: store.clone(),
    }
    .execute(partner.id, id)
    .await
    .unwrap();

    assert!(store.food(id).is_none());
    assert_eq!(store.relation_count(id, RelationKind::Like), 0);
    assert_eq!(store.relation_count(id, RelationKind::Save), 0);
}

#[tokio::test]
async fn should_keep_food_when_non_owner_deletes() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    let food = test_food(partner.id, "jalebi", 0);
    let id = food.id;
    store.insert_food(food);

    let result = DeleteFoodUseCase {
        repo: store.clone(),
    }
    .execute(PartnerId(Uuid::now_v7()), id)
    .await;

    assert!(matches!(result, Err(FoodServiceError::Forbidden)));
    assert!(store.food(id).is_some());
}

// ── Partner profile ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_partner_with_their_foods_only() {
    let partner = test_partner();
    let store = InMemoryStore::with_partner(partner.clone());
    store.insert_food(test_food(partner.id, "kulfi", 2));
    store.insert_food(test_food(partner.id, "lassi", 1));
    store.insert_food(test_food(PartnerId(Uuid::now_v7()), "pizza", 0));

    let profile = GetPartnerProfileUseCase {
        partners: store.clone(),
        foods: store,
    }
    .execute(partner.id)
    .await
    .unwrap();

    assert_eq!(profile.partner, partner);
    assert_eq!(profile.foods.len(), 2);
    assert!(profile.foods.iter().all(|f| f.food_partner_id == partner.id));
}

#[tokio::test]
async fn should_return_partner_not_found() {
    let store = InMemoryStore::default();
    let result = GetPartnerProfileUseCase {
        partners: store.clone(),
        foods: store.clone(),
    }
    .execute(PartnerId(Uuid::now_v7()))
    .await;
    assert!(matches!(result, Err(FoodServiceError::PartnerNotFound)));

    let result = GetPartnerUseCase { partners: store }
        .execute(PartnerId(Uuid::now_v7()))
        .await;
    assert!(matches!(result, Err(FoodServiceError::PartnerNotFound)));
}
