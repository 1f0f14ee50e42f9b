//! Post handlers — create, list, get, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::dto::request::{CreatePostRequest, ListPostsQuery};
use crate::dto::response::{ApiResponse, MessageResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

use devhub_service::post::service::NewPost;

/// POST /api/posts (admin only)
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let post = state
        .post_service
        .create(
            &ctx,
            NewPost {
                title: req.title,
                content: req.content,
                image: req.image,
                category: req.category,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        "Post created successfully",
        PostResponse::from(post),
    )))
}

/// GET /api/posts?search=
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.post_service.list(query.search.as_deref()).await?;

    Ok(Json(ApiResponse::ok(
        "Posts retrieved successfully",
        posts.into_iter().map(PostResponse::from).collect(),
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let post = state.post_service.get(id).await?;

    Ok(Json(ApiResponse::ok(
        "Post retrieved successfully",
        PostResponse::from(post),
    )))
}

/// DELETE /api/posts/{id} (admin only)
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.post_service.delete(&ctx, id).await?;

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
