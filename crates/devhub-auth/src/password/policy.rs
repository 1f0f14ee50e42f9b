//! Password policy enforcement for new passwords.

use devhub_core::config::auth::AuthConfig;
use devhub_core::error::AppError;

/// Validates password strength against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a plaintext password before it is hashed.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}
