use anyhow::Context as _;

use crate::error::AuthServiceError;
use crate::usecase::validate::MAX_PASSWORD_BYTES;

/// Hash a password with bcrypt on the blocking pool.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AuthServiceError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(hashed)
}

/// Check a password against a stored bcrypt hash on the blocking pool.
///
/// Input past [`MAX_PASSWORD_BYTES`] never matches: bcrypt would silently
/// compare only its first 72 bytes.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthServiceError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }
    let password = password.to_owned();
    let hash = hash.to_owned();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("join password verification task")?
        .context("verify password")?;
    Ok(matches)
}
