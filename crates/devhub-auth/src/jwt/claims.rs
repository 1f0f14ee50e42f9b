//! JWT claims structure used in session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The one canonical token payload.
///
/// Issuance and verification both use exactly this shape; tokens that do
/// not conform are rejected rather than coerced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Admin flag, copied from the user record at issuance time. It is not
    /// re-checked against live data until the next issuance.
    pub is_admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_field_names_are_stable() {
        let claims = Claims {
            sub: Uuid::nil(),
            is_admin: true,
            iat: 0,
            exp: 100,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert!(value.get("sub").is_some());
        assert!(value.get("is_admin").is_some());
        assert!(value.get("iat").is_some());
        assert!(value.get("exp").is_some());
        // Legacy shapes like `id` or `_id` must never reappear.
        assert!(value.get("id").is_none());
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now().timestamp();
        let live = Claims {
            sub: Uuid::nil(),
            is_admin: false,
            iat: now,
            exp: now + 3600,
        };
        let stale = Claims {
            sub: Uuid::nil(),
            is_admin: false,
            iat: now - 7200,
            exp: now - 3600,
        };

        assert!(!live.is_expired());
        assert!(stale.is_expired());
    }
}
