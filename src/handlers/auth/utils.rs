use crate::error::ApiError;

/// Validate username format before account creation.
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.is_empty() {
        return Err(ApiError::bad_request("Username cannot be empty"));
    }

    if username.len() < 3 {
        return Err(ApiError::bad_request("Username must be at least 3 characters"));
    }

    if username.len() > 50 {
        return Err(ApiError::bad_request("Username must be less than 50 characters"));
    }

    // Allow alphanumeric, underscore, hyphen; must start alphanumeric
    let mut chars = username.chars();
    let first = chars.next().unwrap_or(' ');
    if !first.is_alphanumeric() {
        return Err(ApiError::bad_request("Username must start with a letter or number"));
    }
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(ApiError::bad_request(
            "Username can only contain letters, numbers, underscore, and hyphen",
        ));
    }

    Ok(())
}

/// Basic email format check for registration.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::bad_request("Email cannot be empty"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < 4 {
        return Err(ApiError::bad_request("Password must be at least 4 characters"));
    }
    Ok(())
}
