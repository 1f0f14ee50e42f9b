//! bcrypt password hashing and verification.

use devhub_core::config::auth::AuthConfig;
use devhub_core::error::AppError;

/// Handles password hashing and verification using bcrypt.
///
/// Hashing cost is proportional to the configured work factor; callers on
/// an async runtime should run these on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// bcrypt work factor.
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devhub_core::config::auth::AuthConfig;

    fn fast_hasher() -> PasswordHasher {
        // Minimum bcrypt cost keeps the test suite quick.
        PasswordHasher::new(&AuthConfig {
            jwt_secret: "test".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 4,
            password_min_length: 6,
        })
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash_password("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hasher.verify_password("secret1", &hash).unwrap());
        assert!(!hasher.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = fast_hasher();
        let a = hasher.hash_password("secret1").unwrap();
        let b = hasher.hash_password("secret1").unwrap();
        assert_ne!(a, b);
    }
}
