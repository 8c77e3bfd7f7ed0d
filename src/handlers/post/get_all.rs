use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::models::Post;
use crate::store::{PostFilter, PostStore, StoreManager};

use super::page_params;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /post/get-all?skip=&limit= - paginated listing of every post
pub async fn get_all(Query(query): Query<ListQuery>) -> Result<ApiResponse<Vec<Post>>, ApiError> {
    let (skip, limit) = page_params(query.skip, query.limit);
    let pool = StoreManager::pool().await?;

    let posts = PostStore::new(pool)
        .find_many(PostFilter::default(), skip, limit)
        .await?;

    Ok(ApiResponse::success(posts))
}
