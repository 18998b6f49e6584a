use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPartnerAccountRepository, DbUserAccountRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserAccountRepository {
        DbUserAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn partner_repo(&self) -> DbPartnerAccountRepository {
        DbPartnerAccountRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
