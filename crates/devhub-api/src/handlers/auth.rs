//! Auth handlers — register, signin, google.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{GoogleAuthRequest, RegisterRequest, SignInRequest};
use crate::dto::response::{ApiResponse, SignInResult, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let user = state
        .auth_service
        .register(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            UserResponse::from(user),
        )),
    ))
}

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<SignInResult>>, ApiError> {
    let signin = state.auth_service.sign_in(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(
        "User logged in successfully",
        SignInResult {
            user: UserResponse::from(signin.user),
            token: signin.token.token,
        },
    )))
}

/// POST /api/auth/google
///
/// Returns 200 when an existing account is signed in and 201 when the
/// call provisioned a new one.
pub async fn google_auth(
    State(state): State<AppState>,
    Json(req): Json<GoogleAuthRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SignInResult>>), ApiError> {
    let signin = state
        .auth_service
        .google_sign_in(&req.email, &req.name, req.picture)
        .await?;

    let (status, message) = if signin.created {
        (StatusCode::CREATED, "User registered successfully")
    } else {
        (StatusCode::OK, "User logged in successfully")
    };

    Ok((
        status,
        Json(ApiResponse::ok(
            message,
            SignInResult {
                user: UserResponse::from(signin.user),
                token: signin.token.token,
            },
        )),
    ))
}
