//! Blog post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use devhub_core::error::{AppError, ErrorKind};
use devhub_core::result::AppResult;
use devhub_entity::post::model::DEFAULT_POST_IMAGE;
use devhub_entity::post::{CreatePost, Post};

/// Repository for blog post CRUD and search operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// List all posts, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// Case-insensitive substring search across title, content, and
    /// category, newest first. The query is treated as a literal: LIKE
    /// metacharacters in it do not act as wildcards.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Post>> {
        let pattern = format!("%{}%", escape_like(query));

        sqlx::query_as::<_, Post>(
            "SELECT * FROM posts \
             WHERE title ILIKE $1 ESCAPE '\\' \
                OR content ILIKE $1 ESCAPE '\\' \
                OR category ILIKE $1 ESCAPE '\\' \
             ORDER BY created_at DESC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search posts", e))
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, image, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.image.as_deref().unwrap_or(DEFAULT_POST_IMAGE))
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Delete a post by ID. Returns whether a row was removed.
    pub async fn delete(&self, post_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Escapes LIKE metacharacters so user input matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
