//! Incoming request bodies and query parameters.
//!
//! String fields on the auth bodies carry `#[serde(default)]` so a
//! missing field deserializes to an empty string and fails the domain
//! presence check with its own message, rather than a deserializer 422.

use serde::Deserialize;

/// Request to register a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Request to sign in with email and password.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Profile asserted by the upstream Google flow.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleAuthRequest {
    /// Asserted email address.
    #[serde(default)]
    pub email: String,
    /// Asserted display name.
    #[serde(default)]
    pub name: String,
    /// Asserted avatar URI.
    pub picture: Option<String>,
}

/// Request to create a post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
    /// Cover image URI.
    pub image: Option<String>,
    /// Category.
    pub category: Option<String>,
}

/// Partial user profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New profile picture URI.
    pub profile_picture: Option<String>,
}

/// Query parameters for listing posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    /// Case-insensitive substring filter across title, content, and category.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_auth_fields_default_to_empty() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());

        let req: SignInRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(req.email, "a@b.co");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_update_user_accepts_camel_case() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"profilePicture":"https://img.example/p.png"}"#).unwrap();
        assert_eq!(
            req.profile_picture.as_deref(),
            Some("https://img.example/p.png")
        );
        assert!(req.username.is_none());
    }
}
