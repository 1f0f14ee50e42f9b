//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use devhub_core::config::auth::AuthConfig;
use devhub_core::error::AppError;

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    token_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

/// A freshly issued token together with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed compact token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_hours: config.token_ttl_hours as i64,
        }
    }

    /// Issues a session token embedding the user id and admin flag.
    pub fn issue(&self, user_id: Uuid, is_admin: bool) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: user_id,
            is_admin,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
