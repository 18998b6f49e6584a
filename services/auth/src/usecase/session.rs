use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use reelbite_auth_types::cookie::SESSION_TOKEN_EXP;
use reelbite_auth_types::token::issue_session_token;
use reelbite_domain::account::AccountKind;

use crate::error::AuthServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token for the account. Returns the token and its expiry.
pub fn issue_session(
    account_id: Uuid,
    kind: AccountKind,
    secret: &str,
) -> Result<(String, u64), AuthServiceError> {
    let exp = now_secs() + SESSION_TOKEN_EXP;
    let token = issue_session_token(account_id, kind, exp, secret)
        .map_err(|e| AuthServiceError::Internal(e.into()))?;
    Ok((token, exp))
}
