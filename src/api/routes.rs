//! API route configuration.

use crate::api::handlers::{
    clinic_ratings_handler, create_clinic_handler, create_rating_handler, create_user_handler,
    delete_clinic_handler, delete_rating_handler, delete_user_handler, get_clinic_handler,
    get_rating_handler, get_user_handler, list_clinics_handler, list_ratings_handler,
    list_users_handler, replace_clinic_handler, replace_rating_handler, replace_user_handler,
    search_clinics_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All REST resource routes.
///
/// # Endpoints
///
/// - `GET    /clinicas`               - List clinics with averages (paginated)
/// - `POST   /clinicas`               - Create a clinic
/// - `GET    /clinicas/filter?term=`  - Search clinics by name
/// - `GET    /clinicas/{id}`          - One clinic with averages
/// - `PUT    /clinicas/{id}`          - Replace a clinic
/// - `DELETE /clinicas/{id}`          - Delete a clinic and its ratings
/// - `GET    /usuarios`               - List users
/// - `POST   /usuarios`               - Register a user
/// - `GET    /usuarios/{id}`          - One user
/// - `PUT    /usuarios/{id}`          - Replace a user
/// - `DELETE /usuarios/{id}`          - Delete a user and their ratings
/// - `GET    /ratings`                - List ratings
/// - `POST   /ratings`                - Record a rating
/// - `GET    /ratings/filter?id_clinica=` - Ratings of one clinic
/// - `GET    /ratings/{id}`           - One rating
/// - `PUT    /ratings/{id}`           - Replace a rating
/// - `DELETE /ratings/{id}`           - Delete a rating
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clinicas",
            get(list_clinics_handler).post(create_clinic_handler),
        )
        .route("/clinicas/filter", get(search_clinics_handler))
        .route(
            "/clinicas/{id}",
            get(get_clinic_handler)
                .put(replace_clinic_handler)
                .delete(delete_clinic_handler),
        )
        .route(
            "/usuarios",
            get(list_users_handler).post(create_user_handler),
        )
        .route(
            "/usuarios/{id}",
            get(get_user_handler)
                .put(replace_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/ratings",
            get(list_ratings_handler).post(create_rating_handler),
        )
        .route("/ratings/filter", get(clinic_ratings_handler))
        .route(
            "/ratings/{id}",
            get(get_rating_handler)
                .put(replace_rating_handler)
                .delete(delete_rating_handler),
        )
}
