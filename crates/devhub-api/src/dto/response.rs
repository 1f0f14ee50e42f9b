//! Outgoing response bodies.
//!
//! Responses are camelCase on the wire. `UserResponse` is the only way a
//! user record leaves the API, and it has no password field at all.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use devhub_entity::post::Post;
use devhub_entity::user::User;

/// Standard envelope for successful responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Operation result.
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a result in the success envelope.
    pub fn ok(message: impl Into<String>, result: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            result,
        }
    }
}

/// Bare acknowledgement for operations with no payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates an acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Public view of a user record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Profile picture URI.
    pub profile_picture: String,
    /// Whether the user is an administrator.
    pub is_admin: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            profile_picture: user.profile_picture,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Sign-in payload: the user plus a fresh session token.
#[derive(Debug, Clone, Serialize)]
pub struct SignInResult {
    /// The signed-in user.
    pub user: UserResponse,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Public view of a post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Cover image URI.
    pub image: String,
    /// Category, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            image: post.image,
            category: post.category,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Health check report.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database reachability.
    pub database: String,
}
