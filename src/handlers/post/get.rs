use axum::extract::Query;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::models::Post;
use crate::store::{PostFilter, PostStore, StoreManager};

#[derive(Debug, Deserialize)]
pub struct GetQuery {
    pub post_id: String,
}

/// GET /post/get?post_id= - one post by id
pub async fn get(Query(query): Query<GetQuery>) -> Result<ApiResponse<Post>, ApiError> {
    let id = Uuid::parse_str(&query.post_id)
        .map_err(|_| ApiError::bad_request("Invalid post id"))?;

    let pool = StoreManager::pool().await?;

    let post = PostStore::new(pool)
        .find_one(PostFilter::by_id(id))
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(ApiResponse::success(post))
}
