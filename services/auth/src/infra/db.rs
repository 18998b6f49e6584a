use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use reelbite_auth_schema::{food_partners, users};
use reelbite_domain::id::{PartnerId, UserId};

use crate::domain::repository::{PartnerAccountRepository, UserAccountRepository};
use crate::domain::types::{PartnerAccount, UserAccount};
use crate::error::AuthServiceError;

/// Unique-email violations race past the `find_by_email` pre-check; surface them as conflicts.
fn insert_error(e: DbErr, what: &'static str) -> AuthServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthServiceError::AccountAlreadyExists,
        _ => AuthServiceError::Internal(anyhow::Error::new(e).context(what)),
    }
}

// ── User accounts ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserAccountRepository {
    pub db: DatabaseConnection,
}

impl UserAccountRepository for DbUserAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(|m| UserAccount {
            id: UserId(m.id),
            full_name: m.full_name,
            email: m.email,
            password_hash: m.password_hash,
            created_at: m.created_at,
        }))
    }

    async fn create(&self, account: &UserAccount) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(account.id.0),
            full_name: Set(account.full_name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            created_at: Set(account.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "create user"))?;
        Ok(())
    }
}

// ── Partner accounts ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPartnerAccountRepository {
    pub db: DatabaseConnection,
}

impl PartnerAccountRepository for DbPartnerAccountRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<PartnerAccount>, AuthServiceError> {
        let model = food_partners::Entity::find()
            .filter(food_partners::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find food partner by email")?;
        Ok(model.map(|m| PartnerAccount {
            id: PartnerId(m.id),
            name: m.name,
            contact_name: m.contact_name,
            phone: m.phone,
            email: m.email,
            address: m.address,
            password_hash: m.password_hash,
            created_at: m.created_at,
        }))
    }

    async fn create(&self, account: &PartnerAccount) -> Result<(), AuthServiceError> {
        food_partners::ActiveModel {
            id: Set(account.id.0),
            name: Set(account.name.clone()),
            contact_name: Set(account.contact_name.clone()),
            phone: Set(account.phone.clone()),
            email: Set(account.email.clone()),
            address: Set(account.address.clone()),
            password_hash: Set(account.password_hash.clone()),
            created_at: Set(account.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, "create food partner"))?;
        Ok(())
    }
}
