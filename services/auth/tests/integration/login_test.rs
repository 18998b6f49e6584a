use reelbite_auth::error::AuthServiceError;
use reelbite_auth::usecase::partner::{LoginPartnerUseCase, RegisterPartnerUseCase};
use reelbite_auth::usecase::user::{LoginInput, LoginUserUseCase, RegisterUserUseCase};
use reelbite_auth_types::token::validate_session_token;
use reelbite_domain::account::AccountKind;

use crate::helpers::{
    MockPartnerAccountRepo, MockUserAccountRepo, TEST_BCRYPT_COST, TEST_JWT_SECRET,
    partner_input, user_input,
};

async fn registered_user_repo() -> MockUserAccountRepo {
    let repo = MockUserAccountRepo::default();
    RegisterUserUseCase {
        repo: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
    .execute(user_input())
    .await
    .unwrap();
    repo
}

fn login(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_login_user_with_correct_password() {
    let usecase = LoginUserUseCase {
        repo: registered_user_repo().await,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let session = usecase
        .execute(login(" meera@example.com ", "paneer123"))
        .await
        .unwrap();

    let claims = validate_session_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.account_id, session.account.id.0);
    assert_eq!(claims.kind, AccountKind::User);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email_alike() {
    let usecase = LoginUserUseCase {
        repo: registered_user_repo().await,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let wrong_password = usecase.execute(login("meera@example.com", "paneer124")).await;
    assert!(matches!(
        wrong_password,
        Err(AuthServiceError::InvalidCredentials)
    ));

    let unknown = usecase.execute(login("ghost@example.com", "paneer123")).await;
    assert!(matches!(unknown, Err(AuthServiceError::InvalidCredentials)));

    let malformed = usecase.execute(login("not-an-email", "paneer123")).await;
    assert!(matches!(malformed, Err(AuthServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_not_log_user_in_as_partner() {
    // Same email registered only as a user: the partner table knows nothing about it.
    let partners = MockPartnerAccountRepo::default();
    let usecase = LoginPartnerUseCase {
        repo: partners,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(login("meera@example.com", "paneer123")).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_login_partner_with_partner_kind() {
    let repo = MockPartnerAccountRepo::default();
    RegisterPartnerUseCase {
        repo: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
    .execute(partner_input())
    .await
    .unwrap();

    let session = LoginPartnerUseCase {
        repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
    .execute(login("kitchen@spiceroute.test", "tandoor!"))
    .await
    .unwrap();

    let claims = validate_session_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.kind, AccountKind::FoodPartner);
}

#[tokio::test]
async fn should_reject_login_that_only_shares_first_72_bytes() {
    let repo = MockUserAccountRepo::default();
    let stored = "a".repeat(72);
    let mut input = user_input();
    input.password = stored.clone();
    RegisterUserUseCase {
        repo: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
    .execute(input)
    .await
    .unwrap();

    let usecase = LoginUserUseCase {
        repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    assert!(usecase.execute(login("meera@example.com", &stored)).await.is_ok());

    let longer = format!("{stored}totally-different");
    let result = usecase.execute(login("meera@example.com", &longer)).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
}
