use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::PostCategory;
use crate::store::posts::NewPost;
use crate::store::{PostStore, StoreManager};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub video_links: Option<Vec<String>>,
    #[serde(default)]
    pub image_links: Option<Vec<String>>,
    #[serde(default)]
    pub references: Option<Vec<String>>,
    pub category: PostCategory,
}

/// POST /post/create - create a post authored by the caller
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    let pool = StoreManager::pool().await?;

    let post = PostStore::new(pool)
        .insert_one(NewPost {
            title: req.title,
            content: req.content,
            tags: req.tags,
            video_links: req.video_links,
            image_links: req.image_links,
            references: req.references,
            category: req.category.to_string(),
            author: auth.username,
        })
        .await?;

    Ok(ApiResponse::created(json!({
        "message": "Post created successfully.",
        "id": post.id
    })))
}
