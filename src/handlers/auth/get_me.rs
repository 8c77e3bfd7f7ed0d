use axum::Extension;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::User;
use crate::store::{StoreManager, UserStore};

/// GET /auth/get-me - the caller's own record, password digest omitted
pub async fn get_me(Extension(auth): Extension<AuthUser>) -> Result<ApiResponse<User>, ApiError> {
    let pool = StoreManager::pool().await?;

    let user = UserStore::new(pool)
        .find_one(&auth.username)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user))
}
