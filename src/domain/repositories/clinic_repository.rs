//! Repository trait for clinic data access.

use crate::domain::entities::{Clinic, ClinicSummary, NewClinic};
use crate::domain::repositories::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for clinic listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicFilter {
    /// Case-insensitive substring the clinic name must contain.
    pub name_contains: Option<String>,
    pub page: PageRequest,
}

impl ClinicFilter {
    /// Creates a filter over all clinics with the given page window.
    pub fn new(page: PageRequest) -> Self {
        Self {
            name_contains: None,
            page,
        }
    }

    /// Restricts the listing to clinics whose name contains `term`.
    pub fn with_name(mut self, term: impl Into<String>) -> Self {
        self.name_contains = Some(term.into());
        self
    }
}

/// Repository interface for managing clinics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClinicRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_clinic.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicRepository: Send + Sync {
    /// Inserts a new clinic and returns it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_clinic: NewClinic) -> Result<Clinic, AppError>;

    /// Finds a clinic by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Clinic>, AppError>;

    /// Lists clinics ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: ClinicFilter) -> Result<Vec<Clinic>, AppError>;

    /// Finds a clinic together with its per-category averages, computed by
    /// the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_summary(&self, id: i64) -> Result<Option<ClinicSummary>, AppError>;

    /// Lists clinics with their per-category averages, computed by the
    /// database. Clinics without ratings are included with empty averages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_summaries(&self, filter: ClinicFilter) -> Result<Vec<ClinicSummary>, AppError>;

    /// Replaces every field of an existing clinic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no clinic has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace(&self, id: i64, clinic: NewClinic) -> Result<Clinic, AppError>;

    /// Deletes a clinic and all of its ratings in one transaction.
    ///
    /// Returns the deleted clinic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no clinic has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<Clinic, AppError>;

    /// Counts all clinics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
