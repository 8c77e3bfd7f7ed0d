use axum::extract::Multipart;
use axum::Extension;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::media::{save_upload, MediaKind};
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::PostCategory;
use crate::store::posts::NewPost;
use crate::store::{PostStore, StoreManager};

/// POST /post/create-with-file - multipart post creation with media uploads
///
/// Text parts: title, content, category, repeated tags, optional repeated
/// references. File parts: videos, images. Uploaded files are stored under
/// the media root and their public links recorded on the post.
pub async fn create_with_file(
    Extension(auth): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<ApiResponse<Value>, ApiError> {
    let mut title: Option<String> = None;
    let mut content: Option<String> = None;
    let mut category: Option<PostCategory> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut references: Vec<String> = Vec::new();
    let mut video_links: Vec<String> = Vec::new();
    let mut image_links: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = Some(read_text(field).await?),
            "content" => content = Some(read_text(field).await?),
            "category" => {
                let raw = read_text(field).await?;
                category = Some(
                    raw.parse()
                        .map_err(|_| ApiError::bad_request("Invalid category"))?,
                );
            }
            "tags" => tags.push(read_text(field).await?),
            "references" => {
                let value = read_text(field).await?;
                // HTML forms submit one empty part when the input is blank
                if !value.is_empty() {
                    references.push(value);
                }
            }
            "videos" => {
                let link = store_file(field, MediaKind::Videos).await?;
                video_links.push(link);
            }
            "images" => {
                let link = store_file(field, MediaKind::Images).await?;
                image_links.push(link);
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| ApiError::bad_request("Missing field: title"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("Missing field: content"))?;
    let category = category.ok_or_else(|| ApiError::bad_request("Missing field: category"))?;

    let pool = StoreManager::pool().await?;
    let post = PostStore::new(pool)
        .insert_one(NewPost {
            title,
            content,
            tags,
            video_links: Some(video_links),
            image_links: Some(image_links),
            references: if references.is_empty() {
                None
            } else {
                Some(references)
            },
            category: category.to_string(),
            author: auth.username,
        })
        .await?;

    Ok(ApiResponse::created(json!({
        "message": "Post created successfully.",
        "id": post.id
    })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))
}

async fn store_file(
    field: axum::extract::multipart::Field<'_>,
    kind: MediaKind,
) -> Result<String, ApiError> {
    let original_name = field.file_name().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?;
    save_upload(kind, &original_name, &bytes).await
}
