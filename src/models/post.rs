use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A wiki post. Owned exclusively by its author.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub video_links: Option<Vec<String>>,
    pub image_links: Option<Vec<String>>,
    pub references: Option<Vec<String>>,
    pub category: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Accepted post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    News,
    Science,
    Technology,
    Space,
    Other,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::News => "news",
            PostCategory::Science => "science",
            PostCategory::Technology => "technology",
            PostCategory::Space => "space",
            PostCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(PostCategory::News),
            "science" => Ok(PostCategory::Science),
            "technology" => Ok(PostCategory::Technology),
            "space" => Ok(PostCategory::Space),
            "other" => Ok(PostCategory::Other),
            _ => Err(()),
        }
    }
}

/// Columns the edit operation may replace. Everything else (id, author,
/// created_at) is immutable through the API.
pub const EDITABLE_FIELDS: &[&str] = &[
    "title",
    "content",
    "tags",
    "video_links",
    "image_links",
    "references",
    "category",
];

pub fn is_editable_field(field: &str) -> bool {
    EDITABLE_FIELDS.contains(&field)
}
