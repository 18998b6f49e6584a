use chrono::Utc;
use uuid::Uuid;

use reelbite_domain::account::AccountKind;
use reelbite_domain::id::UserId;

use crate::domain::repository::UserAccountRepository;
use crate::domain::types::{IssuedSession, UserAccount};
use crate::error::AuthServiceError;
use crate::usecase::password::{hash_password, verify_password};
use crate::usecase::session::issue_session;
use crate::usecase::validate::{check_password, normalize_email, required};

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserAccountRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl<R: UserAccountRepository> RegisterUserUseCase<R> {
    pub async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<IssuedSession<UserAccount>, AuthServiceError> {
        let full_name = required("full_name", &input.full_name)?;
        let email = normalize_email(&input.email)?;
        check_password(&input.password)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::AccountAlreadyExists);
        }

        let account = UserAccount {
            id: UserId(Uuid::now_v7()),
            full_name,
            email,
            password_hash: hash_password(&input.password, self.bcrypt_cost).await?,
            created_at: Utc::now(),
        };
        self.repo.create(&account).await?;
        tracing::info!(user_id = %account.id, "user registered");

        let (token, exp) = issue_session(account.id.0, AccountKind::User, &self.jwt_secret)?;
        Ok(IssuedSession {
            account,
            token,
            exp,
        })
    }
}

// ── LoginUser ────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUserUseCase<R: UserAccountRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserAccountRepository> LoginUserUseCase<R> {
    pub async fn execute(
        &self,
        input: LoginInput,
    ) -> Result<IssuedSession<UserAccount>, AuthServiceError> {
        // Malformed input and unknown accounts are indistinguishable to the caller.
        let email =
            normalize_email(&input.email).map_err(|_| AuthServiceError::InvalidCredentials)?;
        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;
        if !verify_password(&input.password, &account.password_hash).await? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let (token, exp) = issue_session(account.id.0, AccountKind::User, &self.jwt_secret)?;
        Ok(IssuedSession {
            account,
            token,
            exp,
        })
    }
}
