use chrono::Utc;
use uuid::Uuid;

use reelbite_domain::account::AccountKind;
use reelbite_domain::id::PartnerId;

use crate::domain::repository::PartnerAccountRepository;
use crate::domain::types::{IssuedSession, PartnerAccount};
use crate::error::AuthServiceError;
use crate::usecase::password::{hash_password, verify_password};
use crate::usecase::session::issue_session;
use crate::usecase::user::LoginInput;
use crate::usecase::validate::{check_password, normalize_email, required};

// ── RegisterPartner ──────────────────────────────────────────────────────────

pub struct RegisterPartnerInput {
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub address: String,
}

pub struct RegisterPartnerUseCase<R: PartnerAccountRepository> {
    pub repo: R,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl<R: PartnerAccountRepository> RegisterPartnerUseCase<R> {
    pub async fn execute(
        &self,
        input: RegisterPartnerInput,
    ) -> Result<IssuedSession<PartnerAccount>, AuthServiceError> {
        let name = required("name", &input.name)?;
        let contact_name = required("contact_name", &input.contact_name)?;
        let phone = required("phone", &input.phone)?;
        let address = required("address", &input.address)?;
        let email = normalize_email(&input.email)?;
        check_password(&input.password)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::AccountAlreadyExists);
        }

        let account = PartnerAccount {
            id: PartnerId(Uuid::now_v7()),
            name,
            contact_name,
            phone,
            email,
            address,
            password_hash: hash_password(&input.password, self.bcrypt_cost).await?,
            created_at: Utc::now(),
        };
        self.repo.create(&account).await?;
        tracing::info!(partner_id = %account.id, "food partner registered");

        let (token, exp) =
            issue_session(account.id.0, AccountKind::FoodPartner, &self.jwt_secret)?;
        Ok(IssuedSession {
            account,
            token,
            exp,
        })
    }
}

// ── LoginPartner ─────────────────────────────────────────────────────────────

pub struct LoginPartnerUseCase<R: PartnerAccountRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: PartnerAccountRepository> LoginPartnerUseCase<R> {
    pub async fn execute(
        &self,
        input: LoginInput,
    ) -> Result<IssuedSession<PartnerAccount>, AuthServiceError> {
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

        let (token, exp) =
            issue_session(account.id.0, AccountKind::FoodPartner, &self.jwt_secret)?;
        Ok(IssuedSession {
            account,
            token,
            exp,
        })
    }
}
