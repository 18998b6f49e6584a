use crate::error::AuthServiceError;

pub const MIN_PASSWORD_LENGTH: usize = 6;
/// bcrypt only looks at the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Trim and lowercase an email, rejecting anything without a local part and domain.
pub fn normalize_email(raw: &str) -> Result<String, AuthServiceError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(AuthServiceError::MissingData("email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthServiceError::InvalidEmail),
    }
}

pub fn check_password(password: &str) -> Result<(), AuthServiceError> {
    if password.is_empty() {
        return Err(AuthServiceError::MissingData("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthServiceError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AuthServiceError::PasswordTooLong(MAX_PASSWORD_BYTES));
    }
    Ok(())
}

/// Trimmed value of a required text field.
pub fn required(field: &'static str, value: &str) -> Result<String, AuthServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthServiceError::MissingData(field));
    }
    Ok(value.to_owned())
}
