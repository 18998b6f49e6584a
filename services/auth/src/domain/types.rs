use chrono::{DateTime, Utc};

use reelbite_domain::id::{PartnerId, UserId};

/// Customer account as stored by the auth service.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Food partner account as stored by the auth service.
#[derive(Debug, Clone)]
pub struct PartnerAccount {
    pub id: PartnerId,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A freshly signed session for an account.
#[derive(Debug, Clone)]
pub struct IssuedSession<A> {
    pub account: A,
    pub token: String,
    pub exp: u64,
}
