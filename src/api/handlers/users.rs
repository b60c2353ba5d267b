//! Handlers for user endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::user::{UserRequest, UserResponse};
use crate::api::extract::{ApiPath, ApiQuery, ValidJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists users.
///
/// # Endpoint
///
/// `GET /usuarios`
pub async fn list_users_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let page = params
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let users = state.user_service.list_users(page).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `GET /usuarios/{id}`
pub async fn get_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Registers a user.
///
/// # Endpoint
///
/// `POST /usuarios`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or invalid.
/// Returns 409 Conflict if the handle is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .create_user(payload.handle, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces handle and password of a user.
///
/// # Endpoint
///
/// `PUT /usuarios/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the user does not exist.
/// Returns 409 Conflict if the handle belongs to another user.
pub async fn replace_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .replace_user(id, payload.handle, &payload.password)
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user and all of their ratings.
///
/// # Endpoint
///
/// `DELETE /usuarios/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.delete_user(id).await?;

    Ok(Json(user.into()))
}
