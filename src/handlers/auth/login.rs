use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::TokenCodec;
use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::store::{StoreManager, UserStore};

/// `username` may hold either a username or an email address.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - check credentials and mint a token
///
/// Unknown identity and wrong password answer identically.
pub async fn login(Json(req): Json<LoginRequest>) -> Result<ApiResponse<Value>, ApiError> {
    let pool = StoreManager::pool().await?;

    let user = UserStore::new(pool)
        .find_one(&req.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials."))?;

    let password_ok = bcrypt::verify(&req.password, &user.password_hash).unwrap_or(false);
    if !password_ok {
        return Err(ApiError::unauthorized("Invalid credentials."));
    }

    // The token always asserts the canonical username, even when the
    // login presented an email.
    let token = TokenCodec::from_config().issue(&user.username).map_err(|e| {
        tracing::error!("Token issuance failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    Ok(ApiResponse::success(json!({ "token": token })))
}
