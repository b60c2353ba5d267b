//! Business logic services for the application layer.

pub mod clinic_service;
pub mod rating_service;
pub mod user_service;

pub use clinic_service::ClinicService;
pub use rating_service::RatingService;
pub use user_service::UserService;
