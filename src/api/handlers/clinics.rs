//! Handlers for clinic endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::clinic::{ClinicRequest, ClinicResponse};
use crate::api::dto::pagination::{ClinicSearchParams, PaginationParams};
use crate::api::extract::{ApiPath, ApiQuery, ValidJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists clinics with their per-category averages.
///
/// # Endpoint
///
/// `GET /clinicas`
///
/// # Query Parameters
///
/// - `pag` (optional): Page number, 1-indexed (default: 1)
/// - `por_pag` (optional): Items per page (max: 1000). Without it every clinic is returned.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_clinics_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<ClinicResponse>>, AppError> {
    let page = params
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let clinics = state.clinic_service.list_clinics(page).await?;

    Ok(Json(clinics.into_iter().map(ClinicResponse::from).collect()))
}

/// Searches clinics by name, ignoring case.
///
/// # Endpoint
///
/// `GET /clinicas/filter?term=norte`
///
/// Accepts the same pagination parameters as [`list_clinics_handler`].
///
/// # Errors
///
/// Returns 400 Bad Request if `term` is missing or blank.
pub async fn search_clinics_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ClinicSearchParams>,
) -> Result<Json<Vec<ClinicResponse>>, AppError> {
    let page = params
        .pagination
        .to_page_request()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let clinics = state
        .clinic_service
        .search_clinics(&params.term, page)
        .await?;

    Ok(Json(clinics.into_iter().map(ClinicResponse::from).collect()))
}

/// Retrieves one clinic with its averages.
///
/// # Endpoint
///
/// `GET /clinicas/{id}`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "nombre": "Clínica del Sol",
///   "financ": "privado",
///   "direccion": "San Martín 123",
///   "localidad": "Mendoza",
///   "telefono": "261 555 0101",
///   "web": null,
///   "imagen": null,
///   "creado": "2024-06-01T12:00:00Z",
///   "promedios": { "promedio_inst": 3.0, "promedio_medi": 5.0, "promedio_serv": null }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the clinic does not exist.
pub async fn get_clinic_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ClinicResponse>, AppError> {
    let summary = state.clinic_service.get_clinic(id).await?;

    Ok(Json(summary.into()))
}

/// Creates a clinic.
///
/// # Endpoint
///
/// `POST /clinicas`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or a field is invalid.
pub async fn create_clinic_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ClinicRequest>,
) -> Result<(StatusCode, Json<ClinicResponse>), AppError> {
    let clinic = state.clinic_service.create_clinic(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(clinic.into())))
}

/// Replaces every field of a clinic.
///
/// # Endpoint
///
/// `PUT /clinicas/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or a field is invalid.
/// Returns 404 Not Found if the clinic does not exist.
pub async fn replace_clinic_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<ClinicRequest>,
) -> Result<Json<ClinicResponse>, AppError> {
    let clinic = state
        .clinic_service
        .replace_clinic(id, payload.into())
        .await?;

    Ok(Json(clinic.into()))
}

/// Deletes a clinic and all of its ratings, returning the deleted clinic.
///
/// # Endpoint
///
/// `DELETE /clinicas/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the clinic does not exist.
pub async fn delete_clinic_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ClinicResponse>, AppError> {
    let clinic = state.clinic_service.delete_clinic(id).await?;

    Ok(Json(clinic.into()))
}
