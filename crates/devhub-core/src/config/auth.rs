//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Rotating `jwt_secret` invalidates all previously issued tokens; since
/// tokens are stateless and there is no revocation list, that is the only
/// mass-invalidation mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token validity in hours from issuance.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// bcrypt work factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Minimum password length before hashing.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_password_min() -> usize {
    6
}
