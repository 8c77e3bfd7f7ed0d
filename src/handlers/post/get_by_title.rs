use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::models::Post;
use crate::store::{PostFilter, PostStore, StoreManager};

use super::page_params;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /post/get-by-title?title= - posts whose title matches exactly
pub async fn get_by_title(
    Query(query): Query<TitleQuery>,
) -> Result<ApiResponse<Vec<Post>>, ApiError> {
    let (skip, limit) = page_params(query.skip, query.limit);
    let pool = StoreManager::pool().await?;

    let posts = PostStore::new(pool)
        .find_many(PostFilter::by_title(query.title), skip, limit)
        .await?;

    Ok(ApiResponse::success(posts))
}
