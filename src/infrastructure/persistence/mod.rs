//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and row structs decoded through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgClinicRepository`] - Clinic storage, name search and rating averages
//! - [`PgUserRepository`] - User storage
//! - [`PgRatingRepository`] - Rating storage and per-clinic lookups

pub mod pg_clinic_repository;
pub mod pg_rating_repository;
pub mod pg_user_repository;

pub use pg_clinic_repository::PgClinicRepository;
pub use pg_rating_repository::PgRatingRepository;
pub use pg_user_repository::PgUserRepository;
