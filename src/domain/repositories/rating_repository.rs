//! Repository trait for rating data access.

use crate::domain::entities::{NewRating, Rating};
use crate::domain::repositories::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing ratings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRatingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_rating.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Inserts a new rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the clinic or user does not exist
    /// or the value is out of range.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_rating: NewRating) -> Result<Rating, AppError>;

    /// Finds a rating by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Rating>, AppError>;

    /// Lists ratings ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: PageRequest) -> Result<Vec<Rating>, AppError>;

    /// Lists every rating of one clinic, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_clinic(&self, clinic_id: i64) -> Result<Vec<Rating>, AppError>;

    /// Lists every rating belonging to any of the given clinics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_clinics(&self, clinic_ids: &[i64]) -> Result<Vec<Rating>, AppError>;

    /// Replaces every field of an existing rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rating has this identifier.
    /// Returns [`AppError::Validation`] on broken references.
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace(&self, id: i64, rating: NewRating) -> Result<Rating, AppError>;

    /// Deletes a rating and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rating has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Rating, AppError>;

    /// Counts all ratings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
