//! User handlers — self-service update and delete.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

use devhub_service::user::service::UpdateProfile;

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update_profile(
            &ctx,
            id,
            UpdateProfile {
                username: req.username,
                email: req.email,
                password: req.password,
                profile_picture: req.profile_picture,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete_account(&ctx, id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
