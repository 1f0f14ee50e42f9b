//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile picture assigned to accounts that never uploaded one.
pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/7/7c/Profile_avatar_placeholder_large.png";

/// A registered user of the blog.
///
/// The password hash is carried in memory for verification but is never
/// serialized, so no outward response can contain it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name (3–50 characters, trimmed).
    pub username: String,
    /// Unique email address, stored lowercase.
    pub email: String,
    /// bcrypt password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Profile picture URI.
    pub profile_picture: String,
    /// Whether this user may create and delete posts.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address, already lowercased.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Profile picture URI; the placeholder is used when absent.
    pub profile_picture: Option<String>,
}

/// Partial update of an existing user's profile. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New username.
    pub username: Option<String>,
    /// New email address, already lowercased.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
    /// New profile picture URI.
    pub profile_picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            profile_picture: DEFAULT_PROFILE_PICTURE.to_string(),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
        assert!(json.contains("alice"));
    }
}
