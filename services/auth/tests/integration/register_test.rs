use reelbite_auth::error::AuthServiceError;
use reelbite_auth::usecase::partner::RegisterPartnerUseCase;
use reelbite_auth::usecase::user::RegisterUserUseCase;
use reelbite_auth_types::token::validate_session_token;
use reelbite_domain::account::AccountKind;

use crate::helpers::{
    MockPartnerAccountRepo, MockUserAccountRepo, TEST_BCRYPT_COST, TEST_JWT_SECRET,
    partner_input, user_input,
};

fn register_user_usecase(repo: MockUserAccountRepo) -> RegisterUserUseCase<MockUserAccountRepo> {
    RegisterUserUseCase {
        repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_with_hashed_password_and_session() {
    let repo = MockUserAccountRepo::default();
    let session = register_user_usecase(repo.clone())
        .execute(user_input())
        .await
        .unwrap();

    assert_eq!(session.account.email, "meera@example.com");
    assert_ne!(session.account.password_hash, "paneer123");
    assert!(bcrypt::verify("paneer123", &session.account.password_hash).unwrap());

    let claims = validate_session_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.account_id, session.account.id.0);
    assert_eq!(claims.kind, AccountKind::User);
    assert_eq!(repo.accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_user_email_case_insensitively() {
    let repo = MockUserAccountRepo::default();
    let usecase = register_user_usecase(repo.clone());
    usecase.execute(user_input()).await.unwrap();

    let mut again = user_input();
    again.email = "MEERA@example.COM".to_owned();
    let result = usecase.execute(again).await;
    assert!(matches!(result, Err(AuthServiceError::AccountAlreadyExists)));
    assert_eq!(repo.accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_validate_user_fields_before_storing() {
    let repo = MockUserAccountRepo::default();
    let usecase = register_user_usecase(repo.clone());

    let mut no_name = user_input();
    no_name.full_name = "  ".to_owned();
    assert!(matches!(
        usecase.execute(no_name).await,
        Err(AuthServiceError::MissingData("full_name"))
    ));

    let mut bad_email = user_input();
    bad_email.email = "meera.example.com".to_owned();
    assert!(matches!(
        usecase.execute(bad_email).await,
        Err(AuthServiceError::InvalidEmail)
    ));

    let mut short = user_input();
    short.password = "abc".to_owned();
    assert!(matches!(
        usecase.execute(short).await,
        Err(AuthServiceError::PasswordTooShort(6))
    ));

    let mut too_long = user_input();
    too_long.password = format!("{}REAL-SECRET-TAIL", "a".repeat(72));
    assert!(matches!(
        usecase.execute(too_long).await,
        Err(AuthServiceError::PasswordTooLong(72))
    ));

    assert!(repo.accounts.lock().unwrap().is_empty());
}

// ── RegisterPartner ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_partner_with_partner_session() {
    let repo = MockPartnerAccountRepo::default();
    let usecase = RegisterPartnerUseCase {
        repo: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    };
    let session = usecase.execute(partner_input()).await.unwrap();

    assert_eq!(session.account.name, "Spice Route");
    let claims = validate_session_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.kind, AccountKind::FoodPartner);
    assert_eq!(claims.account_id, session.account.id.0);
}

#[tokio::test]
async fn should_require_every_partner_field() {
    let usecase = RegisterPartnerUseCase {
        repo: MockPartnerAccountRepo::default(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    };

    let mut no_address = partner_input();
    no_address.address = String::new();
    assert!(matches!(
        usecase.execute(no_address).await,
        Err(AuthServiceError::MissingData("address"))
    ));

    let mut no_contact = partner_input();
    no_contact.contact_name = " ".to_owned();
    assert!(matches!(
        usecase.execute(no_contact).await,
        Err(AuthServiceError::MissingData("contact_name"))
    ));
}
