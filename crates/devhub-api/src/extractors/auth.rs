//! Bearer-token authorization gate.
//!
//! Handlers opt in by taking an [`AuthUser`] argument. The gate reads the
//! token from the `Authorization: Bearer` header, falling back to a bare
//! `token` header, verifies it, and hands the handler a [`RequestContext`].
//!
//! A request with no token at all is rejected 401; a request with a token
//! that fails verification (bad signature, malformed, expired) is 403.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use devhub_core::error::AppError;
use devhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, extracted from the request headers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub RequestContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or_else(|| AppError::unauthenticated("Missing authentication token"))?;

        let claims = state.jwt_decoder.decode(&token)?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.is_admin,
        )))
    }
}

/// Pulls the session token out of the headers. `Authorization: Bearer`
/// wins; a bare `token` header is accepted as a fallback.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.trim().to_string());
            }
        }
    }

    headers
        .get("token")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
