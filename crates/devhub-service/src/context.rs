//! Request context carrying the authenticated identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted from a verified token by the authorization gate and passed
/// into service methods so that every operation knows *who* is acting.
/// Lives only for the duration of the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The admin flag as it stood when the token was issued.
    pub is_admin: bool,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }
}
