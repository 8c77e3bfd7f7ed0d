use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::models::Post;
use crate::store::{PostFilter, PostStore, StoreManager};

use super::page_params;

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    pub author: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /post/get-by-author?author=&skip=&limit= - posts by one author
pub async fn get_by_author(
    Query(query): Query<AuthorQuery>,
) -> Result<ApiResponse<Vec<Post>>, ApiError> {
    let (skip, limit) = page_params(query.skip, query.limit);
    let pool = StoreManager::pool().await?;

    let posts = PostStore::new(pool)
        .find_many(PostFilter::by_author(query.author), skip, limit)
        .await?;

    Ok(ApiResponse::success(posts))
}
