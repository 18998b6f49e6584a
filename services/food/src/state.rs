use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use reelbite_auth_types::identity::SessionKey;

use crate::infra::db::{DbFoodRepository, DbPartnerRepository, DbRelationRepository};
use crate::infra::storage::ImageKitStorage;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub session_key: SessionKey,
    pub storage: ImageKitStorage,
}

impl AppState {
    pub fn food_repo(&self) -> DbFoodRepository {
        DbFoodRepository {
            db: self.db.clone(),
        }
    }

    pub fn relation_repo(&self) -> DbRelationRepository {
        DbRelationRepository {
            db: self.db.clone(),
        }
    }

    pub fn partner_repo(&self) -> DbPartnerRepository {
        DbPartnerRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for SessionKey {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
