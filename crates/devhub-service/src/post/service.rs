//! Post creation, retrieval, search, and deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use devhub_core::error::AppError;
use devhub_core::result::AppResult;
use devhub_database::repositories::post::PostRepository;
use devhub_entity::post::model::{MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH, is_known_category};
use devhub_entity::post::{CreatePost, Post};

use crate::context::RequestContext;

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Cover image URI.
    pub image: Option<String>,
    /// Category.
    pub category: Option<String>,
}

/// Handles blog post operations and their authorization rules.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Creates a post. Admins only.
    pub async fn create(&self, ctx: &RequestContext, input: NewPost) -> AppResult<Post> {
        if !ctx.is_admin {
            return Err(AppError::forbidden("You are not allowed to create a post"));
        }

        let title = input.title.trim();
        let content = input.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::validation(format!(
                "Title cannot exceed {MAX_TITLE_LENGTH} characters"
            )));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::validation(format!(
                "Content cannot exceed {MAX_CONTENT_LENGTH} characters"
            )));
        }
        if let Some(category) = input.category.as_deref() {
            if !is_known_category(category) {
                return Err(AppError::validation(format!(
                    "Unknown category '{category}'"
                )));
            }
        }

        let post = self
            .post_repo
            .create(&CreatePost {
                title: title.to_string(),
                content: content.to_string(),
                image: input.image,
                category: input.category,
            })
            .await?;

        info!(post_id = %post.id, user_id = %ctx.user_id, "Post created");
        Ok(post)
    }

    /// Lists posts newest-first, optionally filtered by a case-insensitive
    /// substring match across title, content, and category.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Post>> {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(query) => self.post_repo.search(query).await,
            None => self.post_repo.find_all().await,
        }
    }

    /// Fetches a single post.
    pub async fn get(&self, id: Uuid) -> AppResult<Post> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Deletes a post. Admins only; existence is checked first.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        if !ctx.is_admin {
            return Err(AppError::forbidden("Only admins can delete posts"));
        }

        self.post_repo.delete(post.id).await?;

        info!(post_id = %post.id, user_id = %ctx.user_id, "Post deleted");
        Ok(())
    }
}
