//! Handlers for rating endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::pagination::{PaginationParams, RatingFilterParams};
use crate::api::dto::rating::{RatingRequest, RatingResponse};
use crate::api::extract::{ApiPath, ApiQuery, ValidJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists ratings.
///
/// # Endpoint
///
/// `GET /ratings`
pub async fn list_ratings_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<RatingResponse>>, AppError> {
    let page = params
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let ratings = state.rating_service.list_ratings(page).await?;

    Ok(Json(ratings.into_iter().map(RatingResponse::from).collect()))
}

/// Lists the ratings of one clinic.
///
/// # Endpoint
///
/// `GET /ratings/filter?id_clinica=3`
///
/// # Errors
///
/// Returns 400 Bad Request if `id_clinica` is missing or not a number.
/// Returns 404 Not Found if the clinic does not exist.
pub async fn clinic_ratings_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RatingFilterParams>,
) -> Result<Json<Vec<RatingResponse>>, AppError> {
    let ratings = state
        .rating_service
        .list_for_clinic(params.id_clinica)
        .await?;

    Ok(Json(ratings.into_iter().map(RatingResponse::from).collect()))
}

/// `GET /ratings/{id}`
pub async fn get_rating_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RatingResponse>, AppError> {
    let rating = state.rating_service.get_rating(id).await?;

    Ok(Json(rating.into()))
}

/// Records a rating.
///
/// # Endpoint
///
/// `POST /ratings`
///
/// # Errors
///
/// Returns 400 Bad Request if `valor` is outside 1..=5, `tipo` is unknown,
/// or the referenced clinic or user does not exist.
pub async fn create_rating_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RatingRequest>,
) -> Result<(StatusCode, Json<RatingResponse>), AppError> {
    let rating = state.rating_service.create_rating(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(rating.into())))
}

/// `PUT /ratings/{id}`
pub async fn replace_rating_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<RatingRequest>,
) -> Result<Json<RatingResponse>, AppError> {
    let rating = state
        .rating_service
        .replace_rating(id, payload.into())
        .await?;

    Ok(Json(rating.into()))
}

/// `DELETE /ratings/{id}`
pub async fn delete_rating_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RatingResponse>, AppError> {
    let rating = state.rating_service.delete_rating(id).await?;

    Ok(Json(rating.into()))
}
