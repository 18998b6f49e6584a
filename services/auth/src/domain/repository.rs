#![allow(async_fn_in_trait)]

use crate::domain::types::{PartnerAccount, UserAccount};
use crate::error::AuthServiceError;

/// Repository for customer accounts.
pub trait UserAccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, AuthServiceError>;

    /// Insert a new account. A duplicate email yields `AccountAlreadyExists`.
    async fn create(&self, account: &UserAccount) -> Result<(), AuthServiceError>;
}

/// Repository for food partner accounts.
pub trait PartnerAccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str)
    -> Result<Option<PartnerAccount>, AuthServiceError>;

    /// Insert a new account. A duplicate email yields `AccountAlreadyExists`.
    async fn create(&self, account: &PartnerAccount) -> Result<(), AuthServiceError>;
}
