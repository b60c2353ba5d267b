//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::clinic_service::ClinicService`] - Clinic CRUD, search and rating averages
//! - [`services::user_service::UserService`] - User CRUD with credential hashing
//! - [`services::rating_service::RatingService`] - Rating CRUD with reference checks

pub mod services;
