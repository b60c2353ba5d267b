//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clinics;
pub mod health;
pub mod ratings;
pub mod users;

pub use clinics::{
    create_clinic_handler, delete_clinic_handler, get_clinic_handler, list_clinics_handler,
    replace_clinic_handler, search_clinics_handler,
};
pub use health::health_handler;
pub use ratings::{
    clinic_ratings_handler, create_rating_handler, delete_rating_handler, get_rating_handler,
    list_ratings_handler, replace_rating_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    replace_user_handler,
};
