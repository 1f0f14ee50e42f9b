//! User profile update and account deletion. Strictly self-service:
//! there is no admin override on either operation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use devhub_auth::password::{PasswordHasher, PasswordPolicy};
use devhub_core::error::AppError;
use devhub_core::result::AppResult;
use devhub_database::repositories::user::UserRepository;
use devhub_entity::user::{UpdateUser, User};

use crate::context::RequestContext;

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New profile picture URI.
    pub profile_picture: Option<String>,
}

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: Arc<PasswordPolicy>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
        }
    }

    /// Updates a user's own profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        target: Uuid,
        update: UpdateProfile,
    ) -> AppResult<User> {
        if ctx.user_id != target {
            return Err(AppError::forbidden("You can only update your own account"));
        }

        let password_hash = match update.password.as_deref() {
            Some(password) => {
                self.policy.validate(password)?;
                Some(self.hash_blocking(password.to_string()).await?)
            }
            None => None,
        };

        if let Some(username) = update.username.as_deref() {
            validate_username(username)?;
        }

        let email = match update.email.as_deref() {
            Some(email) => {
                let email = email.trim();
                if !email.validate_email() {
                    return Err(AppError::validation("Invalid email format"));
                }
                Some(email.to_lowercase())
            }
            None => None,
        };

        let user = self
            .user_repo
            .update(&UpdateUser {
                id: target,
                username: update.username,
                email,
                password_hash,
                profile_picture: update.profile_picture,
            })
            .await?;

        info!(user_id = %target, "Profile updated");
        Ok(user)
    }

    /// Deletes a user's own account.
    pub async fn delete_account(&self, ctx: &RequestContext, target: Uuid) -> AppResult<()> {
        if ctx.user_id != target {
            return Err(AppError::forbidden("You can only delete your own account"));
        }

        self.user_repo.delete(target).await?;

        info!(user_id = %target, "Account deleted");
        Ok(())
    }

    async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }
}

/// Validates a replacement username: 3–20 characters, no whitespace,
/// entirely lowercase, ASCII alphanumeric only.
fn validate_username(username: &str) -> AppResult<()> {
    let len = username.chars().count();
    if !(3..=20).contains(&len) {
        return Err(AppError::validation(
            "Username must be between 3 and 20 characters",
        ));
    }
    if username.contains(char::is_whitespace) {
        return Err(AppError::validation("Username must not contain spaces"));
    }
    if username != username.to_lowercase() {
        return Err(AppError::validation("Username must be in lowercase"));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "Username must not contain special characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("abc123").is_ok());
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("a2345678901234567890").is_ok());
    }

    #[test]
    fn test_rejects_uppercase_and_spaces() {
        // "Abc 123" breaks two rules at once; the length/whitespace checks
        // fire before the case check.
        assert!(validate_username("Abc 123").is_err());
        assert!(validate_username("abc 123").is_err());
        assert!(validate_username("Abc123").is_err());
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("a23456789012345678901").is_err());
    }

    #[test]
    fn test_rejects_special_characters() {
        assert!(validate_username("abc_123").is_err());
        assert!(validate_username("abc-123").is_err());
        assert!(validate_username("abc.123").is_err());
    }
}
