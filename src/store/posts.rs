use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::post::is_editable_field;
use crate::models::Post;
use crate::store::StoreError;

/// Equality predicates compiled into a bound WHERE clause.
#[derive(Debug, Default, Clone)]
pub struct PostFilter {
    pub id: Option<Uuid>,
    pub author: Option<String>,
    pub title: Option<String>,
}

impl PostFilter {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Default::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Ownership filter: id AND author must both match.
    pub fn owned(id: Uuid, author: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            author: Some(author.into()),
            title: None,
        }
    }

    fn apply(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut sep = " WHERE ";
        if let Some(id) = self.id {
            qb.push(sep).push("id = ").push_bind(id);
            sep = " AND ";
        }
        if let Some(author) = &self.author {
            qb.push(sep).push("author = ").push_bind(author.clone());
            sep = " AND ";
        }
        if let Some(title) = &self.title {
            qb.push(sep).push("title = ").push_bind(title.clone());
        }
    }
}

/// A post record as inserted; the author comes from the resolved
/// principal, never from the request body.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub video_links: Option<Vec<String>>,
    pub image_links: Option<Vec<String>>,
    pub references: Option<Vec<String>>,
    pub category: String,
    pub author: String,
}

/// Typed replacement value for a single-field edit.
#[derive(Debug, Clone)]
pub enum FieldPatch {
    Text(String),
    TextArray(Vec<String>),
    NullableTextArray(Option<Vec<String>>),
}

/// Document store adapter for posts over the shared pool.
pub struct PostStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PostStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_one(&self, post: NewPost) -> Result<Post, StoreError> {
        let inserted = sqlx::query_as::<_, Post>(
            "INSERT INTO posts \
             (id, title, content, tags, video_links, image_links, \"references\", category, author, created_at) \
             VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, $8, now()) \
             RETURNING *",
        )
        .bind(post.title)
        .bind(post.content)
        .bind(post.tags)
        .bind(post.video_links)
        .bind(post.image_links)
        .bind(post.references)
        .bind(post.category)
        .bind(post.author)
        .fetch_one(self.pool)
        .await?;
        Ok(inserted)
    }

    pub async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, StoreError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM posts");
        filter.apply(&mut qb);
        let post = qb
            .build_query_as::<Post>()
            .fetch_optional(self.pool)
            .await?;
        Ok(post)
    }

    pub async fn find_many(
        &self,
        filter: PostFilter,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Post>, StoreError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM posts");
        filter.apply(&mut qb);
        qb.push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(skip);
        let posts = qb.build_query_as::<Post>().fetch_all(self.pool).await?;
        Ok(posts)
    }

    /// Replace a single editable column on the post matching the filter.
    /// Returns the number of rows updated (0 when the filter matched
    /// nothing, which the caller reports as not-found).
    pub async fn update_one(
        &self,
        filter: PostFilter,
        field: &str,
        patch: FieldPatch,
    ) -> Result<u64, StoreError> {
        // Column name is interpolated; it must come from the editable set
        if !is_editable_field(field) {
            return Err(StoreError::NotFound(format!("no such column: {field}")));
        }

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("UPDATE posts SET \"{field}\" = "));
        match patch {
            FieldPatch::Text(v) => qb.push_bind(v),
            FieldPatch::TextArray(v) => qb.push_bind(v),
            FieldPatch::NullableTextArray(v) => qb.push_bind(v),
        };
        filter.apply(&mut qb);

        let result = qb.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_one(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
