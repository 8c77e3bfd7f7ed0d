use axum::extract::{Path, Query};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::media::resolve_media_path;

#[derive(Debug, Deserialize)]
pub struct FilesQuery {
    pub download: Option<String>,
}

/// GET /post/files/*path - serve an uploaded media file
///
/// `?download=1` forces an attachment download instead of inline display.
pub async fn files(
    Path(path): Path<String>,
    Query(query): Query<FilesQuery>,
) -> Result<Response, ApiError> {
    let full_path = resolve_media_path(&path)?;

    let bytes = tokio::fs::read(&full_path)
        .await
        .map_err(|_| ApiError::not_found("File not found"))?;

    let download = query.download.as_deref().is_some_and(|v| !v.is_empty());

    let content_type = if download {
        HeaderValue::from_static("application/octet-stream")
    } else {
        let mime = mime_guess::from_path(&full_path).first_or_octet_stream();
        HeaderValue::from_str(mime.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
    };

    let mut response = (StatusCode::OK, bytes).into_response();
    response.headers_mut().insert(header::CONTENT_TYPE, content_type);

    if download {
        let file_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().replace('"', ""))
            .unwrap_or_default();
        if let Ok(disposition) =
            HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, disposition);
        }
    }

    Ok(response)
}
