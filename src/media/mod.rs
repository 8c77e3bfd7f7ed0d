use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::config;
use crate::error::ApiError;

/// Subdirectory a stored file lands in, by media kind.
#[derive(Debug, Clone, Copy)]
pub enum MediaKind {
    Videos,
    Images,
}

impl MediaKind {
    fn dir(&self) -> &'static str {
        match self {
            MediaKind::Videos => "videos",
            MediaKind::Images => "images",
        }
    }
}

/// Write an uploaded file under the media root with a random name,
/// returning its public link.
pub async fn save_upload(
    kind: MediaKind,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, ApiError> {
    let media = &config::config().media;
    let dir = Path::new(&media.root).join(kind.dir());
    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        tracing::error!("Failed to create media directory {:?}: {}", dir, e);
        ApiError::internal_server_error("Failed to store uploaded file")
    })?;

    let stored_name = match sanitized_extension(original_name) {
        Some(ext) => format!("{}.{}", Uuid::new_v4().simple(), ext),
        None => Uuid::new_v4().simple().to_string(),
    };

    let path = dir.join(&stored_name);
    tokio::fs::write(&path, bytes).await.map_err(|e| {
        tracing::error!("Failed to write uploaded file {:?}: {}", path, e);
        ApiError::internal_server_error("Failed to store uploaded file")
    })?;

    Ok(format!("{}{}/{}", media.base_url, kind.dir(), stored_name))
}

/// Resolve a request path to a file under the media root.
///
/// The path must stay inside the root: absolute paths and any
/// parent-directory component are rejected.
pub fn resolve_media_path(request_path: &str) -> Result<PathBuf, ApiError> {
    let relative = Path::new(request_path);
    let traversal = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if relative.as_os_str().is_empty() || traversal {
        return Err(ApiError::not_found("File not found"));
    }

    Ok(Path::new(&config::config().media.root).join(relative))
}

/// File extension stripped to characters safe to echo into a path.
fn sanitized_extension(name: &str) -> Option<&str> {
    let ext = name.rsplit_once('.')?.1;
    if ext.is_empty() || ext.len() > 16 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
