use axum::extract::Query;
use axum::Extension;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::Post;
use crate::store::{PostFilter, PostStore, StoreManager};

use super::page_params;

#[derive(Debug, Deserialize)]
pub struct MyPostsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /post/myposts - the caller's own posts
pub async fn myposts(
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<MyPostsQuery>,
) -> Result<ApiResponse<Vec<Post>>, ApiError> {
    let (skip, limit) = page_params(query.skip, query.limit);
    let pool = StoreManager::pool().await?;

    let posts = PostStore::new(pool)
        .find_many(PostFilter::by_author(auth.username), skip, limit)
        .await?;

    Ok(ApiResponse::success(posts))
}
