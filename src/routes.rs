//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                  - Health check: database (public)
//! - `/clinicas`, `/usuarios`, `/ratings` - REST resources, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origins from `CORS_ALLOWED_ORIGINS`, any origin by default
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and layer except path normalization.
pub fn router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(cors_allowed_origins))
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/clinicas/` and
/// `/clinicas` reach the same handler.
pub fn app_router(state: AppState, cors_allowed_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_allowed_origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregator::{AverageStrategy, CategoryAverages};
    use crate::domain::entities::{Clinic, ClinicSummary, FundingType, User};
    use crate::domain::repositories::{
        MockClinicRepository, MockRatingRepository, MockUserRepository, PageRequest,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn summary(id: i64, name: &str) -> ClinicSummary {
        ClinicSummary {
            clinic: Clinic {
                id,
                name: name.to_string(),
                funding: FundingType::Public,
                address: "Av. Siempreviva 742".to_string(),
                locality: "Córdoba".to_string(),
                phone: "351 555 0000".to_string(),
                website: None,
                image: None,
                created_at: Utc::now(),
            },
            averages: CategoryAverages {
                facilities: Some(3.0),
                medical_staff: None,
                service: None,
            },
        }
    }

    fn state(
        clinics: MockClinicRepository,
        users: MockUserRepository,
        ratings: MockRatingRepository,
    ) -> AppState {
        AppState::new(
            Arc::new(clinics),
            Arc::new(users),
            Arc::new(ratings),
            AverageStrategy::Database,
        )
    }

    fn server(clinics: MockClinicRepository) -> TestServer {
        let state = state(
            clinics,
            MockUserRepository::new(),
            MockRatingRepository::new(),
        );
        TestServer::new(router(state, &[])).unwrap()
    }

    #[tokio::test]
    async fn test_create_clinic_without_body_is_bad_request() {
        let server = server(MockClinicRepository::new());

        let response = server.post("/clinicas").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_create_clinic_with_invalid_field_is_bad_request() {
        let server = server(MockClinicRepository::new());

        let response = server
            .post("/clinicas")
            .json(&json!({
                "nombre": "",
                "financ": "publico",
                "direccion": "Calle 1",
                "localidad": "Rosario",
                "telefono": "341 555 1234"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_clinic_is_not_found() {
        let mut clinics = MockClinicRepository::new();
        clinics
            .expect_find_summary()
            .withf(|id| *id == 99)
            .returning(|_| Ok(None));

        let response = server(clinics).get("/clinicas/99").await;

        response.assert_status_not_found();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["details"]["id"], 99);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let response = server(MockClinicRepository::new())
            .get("/clinicas/abc")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_clinic_includes_averages() {
        let mut clinics = MockClinicRepository::new();
        clinics
            .expect_find_summary()
            .returning(|id| Ok(Some(summary(id, "Hospital Central"))));

        let response = server(clinics).get("/clinicas/1").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["nombre"], "Hospital Central");
        assert_eq!(body["promedios"]["promedio_inst"], 3.0);
        assert!(body["promedios"]["promedio_medi"].is_null());
    }

    #[tokio::test]
    async fn test_list_clinics_second_page() {
        let mut clinics = MockClinicRepository::new();
        clinics
            .expect_list_summaries()
            .withf(|filter| filter.page == PageRequest::page(2, 1) && filter.name_contains.is_none())
            .returning(|_| Ok(vec![summary(2, "Segunda")]));

        let response = server(clinics).get("/clinicas?pag=2&por_pag=1").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 2);
    }

    #[tokio::test]
    async fn test_list_clinics_rejects_page_zero() {
        let response = server(MockClinicRepository::new())
            .get("/clinicas?pag=0&por_pag=5")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_requires_term() {
        let response = server(MockClinicRepository::new())
            .get("/clinicas/filter")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_handle_is_conflict() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_handle().returning(|handle| {
            Ok(Some(User {
                id: 1,
                handle: handle.to_string(),
                credential_hash: "0".repeat(64),
                created_at: Utc::now(),
            }))
        });
        users.expect_create().never();

        let state = state(MockClinicRepository::new(), users, MockRatingRepository::new());
        let server = TestServer::new(router(state, &[])).unwrap();

        let response = server
            .post("/usuarios")
            .json(&json!({ "handle": "ana", "pwd": "secreto" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
    }

    #[tokio::test]
    async fn test_rating_out_of_range_is_bad_request() {
        let state = state(
            MockClinicRepository::new(),
            MockUserRepository::new(),
            MockRatingRepository::new(),
        );
        let server = TestServer::new(router(state, &[])).unwrap();

        let response = server
            .post("/ratings")
            .json(&json!({ "tipo": "servicio", "valor": 9, "id_clinica": 1, "id_user": 1 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_ok() {
        let mut clinics = MockClinicRepository::new();
        clinics.expect_count().returning(|| Ok(3));

        let response = server(clinics).get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_degraded_when_database_fails() {
        let mut clinics = MockClinicRepository::new();
        clinics
            .expect_count()
            .returning(|| Err(crate::error::AppError::internal("Database error", json!({}))));

        let response = server(clinics).get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["status"], "degraded");
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let mut clinics = MockClinicRepository::new();
        clinics.expect_list_summaries().returning(|_| Ok(vec![]));

        let state = state(clinics, MockUserRepository::new(), MockRatingRepository::new());
        let app = app_router(state, &[]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/clinicas/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
