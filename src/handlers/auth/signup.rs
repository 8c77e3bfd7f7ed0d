use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::store::{StoreManager, UserStore};

use super::utils::{validate_email, validate_password, validate_username};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// POST /auth/signup - create a principal
///
/// Fails with 400 when either the username or the email is already taken.
pub async fn signup(Json(req): Json<SignupRequest>) -> Result<ApiResponse<Value>, ApiError> {
    validate_username(&req.username)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    let pool = StoreManager::pool().await?;
    let users = UserStore::new(pool);

    if users.find_existing(&req.username, &req.email).await?.is_some() {
        return Err(ApiError::bad_request("User already exists."));
    }

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal_server_error("Failed to create user")
    })?;

    users
        .insert_one(&req.username, &req.email, &password_hash)
        .await?;

    Ok(ApiResponse::created(json!({
        "message": "User created successfully."
    })))
}
