//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cover image assigned to posts created without one.
pub const DEFAULT_POST_IMAGE: &str =
    "https://img.freepik.com/premium-vector/illustration-vector-graphic-cartoon-character-blogging_516790-1495.jpg";

/// Categories a post may be filed under.
pub const POST_CATEGORIES: [&str; 7] = [
    "Technology",
    "Health",
    "Lifestyle",
    "Education",
    "Entertainment",
    "Business",
    "Science",
];

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum content length in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// A published blog post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title (1–100 characters).
    pub title: String,
    /// Post body (1–10000 characters).
    pub content: String,
    /// Cover image URI.
    pub image: String,
    /// Category, one of [`POST_CATEGORIES`] when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    /// Post title, already trimmed.
    pub title: String,
    /// Post body, already trimmed.
    pub content: String,
    /// Cover image URI; the placeholder is used when absent.
    pub image: Option<String>,
    /// Category, validated against [`POST_CATEGORIES`].
    pub category: Option<String>,
}

/// Whether `category` is one of the recognized post categories.
pub fn is_known_category(category: &str) -> bool {
    POST_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("Technology"));
        assert!(is_known_category("Science"));
        assert!(!is_known_category("technology"));
        assert!(!is_known_category("Gossip"));
    }

    #[test]
    fn test_absent_category_is_omitted_from_json() {
        let post = Post {
            id: Uuid::new_v4(),
            title: "Hi".to_string(),
            content: "Body".to_string(),
            image: DEFAULT_POST_IMAGE.to_string(),
            category: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(!json.contains("category"));
    }
}
