//! JWT token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use devhub_core::config::auth::AuthConfig;
use devhub_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// A token that is expired, carries a bad signature, or does not conform
/// to the canonical claim shape is rejected as forbidden. A *missing*
/// token is the gate's concern, not the decoder's.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::forbidden("Token has expired")
                    }
                    _ => AppError::forbidden("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use devhub_core::error::ErrorKind;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 4,
            password_min_length: 6,
        }
    }

    #[test]
    fn test_issue_then_decode_round_trip() {
        let config = test_config("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let issued = encoder.issue(user_id, true).unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert!(claims.is_admin);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_expired_token_is_forbidden() {
        let config = test_config("test-secret");
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            is_admin: false,
            iat: now - 172_800,
            exp: now - 86_400,
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_wrong_secret_is_forbidden() {
        let encoder = JwtEncoder::new(&test_config("secret-a"));
        let decoder = JwtDecoder::new(&test_config("secret-b"));

        let issued = encoder.issue(Uuid::new_v4(), false).unwrap();
        let err = decoder.decode(&issued.token).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_garbage_token_is_forbidden() {
        let decoder = JwtDecoder::new(&test_config("test-secret"));
        let err = decoder.decode("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_nonconforming_payload_is_rejected() {
        let config = test_config("test-secret");
        let decoder = JwtDecoder::new(&config);

        // A token carrying the legacy `{id, isAdmin}` shape instead of the
        // canonical claims must not verify.
        #[derive(serde::Serialize)]
        struct LegacyClaims {
            id: String,
            #[serde(rename = "isAdmin")]
            is_admin: bool,
            exp: i64,
        }
        let legacy = LegacyClaims {
            id: Uuid::new_v4().to_string(),
            is_admin: true,
            exp: Utc::now().timestamp() + 3600,
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &legacy, &key).unwrap();

        assert!(decoder.decode(&token).is_err());
    }
}
