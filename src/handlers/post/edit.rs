use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser};
use crate::models::post::is_editable_field;
use crate::models::PostCategory;
use crate::store::posts::FieldPatch;
use crate::store::{PostFilter, PostStore, StoreManager};

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub post_id: String,
    pub field: String,
    pub data: Value,
}

/// PUT /post/edit - replace one editable field of one of the caller's posts
///
/// The update statement filters by post id AND author in a single step;
/// a non-owner gets the same answer as a missing post.
pub async fn edit(
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<EditRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    let id = Uuid::parse_str(&req.post_id)
        .map_err(|_| ApiError::bad_request("Invalid post id"))?;

    if !is_editable_field(&req.field) {
        return Err(ApiError::bad_request("Invalid field to edit"));
    }

    let patch = field_patch(&req.field, req.data)?;

    let pool = StoreManager::pool().await?;
    let updated = PostStore::new(pool)
        .update_one(PostFilter::owned(id, auth.username), &req.field, patch)
        .await?;

    if updated == 0 {
        return Err(ApiError::not_found(
            "Post not found or does not belong to the user",
        ));
    }

    Ok(ApiResponse::success(json!({
        "message": "Post updated successfully"
    })))
}

/// Convert the request's JSON value into the typed patch the named
/// column expects.
fn field_patch(field: &str, data: Value) -> Result<FieldPatch, ApiError> {
    match field {
        "title" | "content" => match data {
            Value::String(s) => Ok(FieldPatch::Text(s)),
            _ => Err(ApiError::bad_request("Field data must be a string")),
        },
        "category" => match data {
            Value::String(s) => {
                let category: PostCategory = s
                    .parse()
                    .map_err(|_| ApiError::bad_request("Invalid category"))?;
                Ok(FieldPatch::Text(category.to_string()))
            }
            _ => Err(ApiError::bad_request("Field data must be a string")),
        },
        "tags" => Ok(FieldPatch::TextArray(string_array(data)?)),
        "video_links" | "image_links" | "references" => match data {
            Value::Null => Ok(FieldPatch::NullableTextArray(None)),
            other => Ok(FieldPatch::NullableTextArray(Some(string_array(other)?))),
        },
        _ => Err(ApiError::bad_request("Invalid field to edit")),
    }
}

fn string_array(data: Value) -> Result<Vec<String>, ApiError> {
    let items = match data {
        Value::Array(items) => items,
        _ => return Err(ApiError::bad_request("Field data must be a list of strings")),
    };
    items
        .into_iter()
        .map(|v| match v {
            Value::String(s) => Ok(s),
            _ => Err(ApiError::bad_request("Field data must be a list of strings")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_strings_only() {
        assert!(matches!(
            field_patch("title", json!("Mars")),
            Ok(FieldPatch::Text(_))
        ));
        assert!(field_patch("title", json!(["Mars"])).is_err());
        assert!(field_patch("content", json!(42)).is_err());
    }

    #[test]
    fn category_must_be_a_known_variant() {
        assert!(matches!(
            field_patch("category", json!("space")),
            Ok(FieldPatch::Text(s)) if s == "space"
        ));
        assert!(field_patch("category", json!("astrology")).is_err());
    }

    #[test]
    fn tags_must_be_a_string_list() {
        assert!(matches!(
            field_patch("tags", json!(["mars", "rover"])),
            Ok(FieldPatch::TextArray(v)) if v.len() == 2
        ));
        assert!(field_patch("tags", json!("mars")).is_err());
        assert!(field_patch("tags", json!(["mars", 7])).is_err());
        assert!(field_patch("tags", json!(null)).is_err());
    }

    #[test]
    fn link_fields_accept_null() {
        assert!(matches!(
            field_patch("references", json!(null)),
            Ok(FieldPatch::NullableTextArray(None))
        ));
        assert!(matches!(
            field_patch("video_links", json!(["https://v"])),
            Ok(FieldPatch::NullableTextArray(Some(_)))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(field_patch("author", json!("eve")).is_err());
        assert!(field_patch("id", json!("x")).is_err());
    }
}
