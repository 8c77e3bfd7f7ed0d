use axum::extract::Path;
use axum::Extension;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::store::{PostFilter, PostStore, StoreManager};

/// DELETE /post/posts/:id - delete one of the caller's posts
///
/// The lookup filters by post id AND author in one query; whether the
/// post is missing or owned by someone else is not distinguished.
pub async fn delete(
    Extension(auth): Extension<AuthUser>,
    Path(post_id): Path<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let id = Uuid::parse_str(&post_id)
        .map_err(|_| ApiError::bad_request("Invalid post id"))?;

    let pool = StoreManager::pool().await?;
    let store = PostStore::new(pool);

    store
        .find_one(PostFilter::owned(id, auth.username))
        .await?
        .ok_or_else(|| {
            ApiError::not_found("Post not found or does not belong to the user")
        })?;

    store.delete_one(id).await?;

    Ok(ApiResponse::success(json!({
        "message": "Post deleted successfully"
    })))
}
