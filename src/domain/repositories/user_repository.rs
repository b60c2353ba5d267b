//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the handle is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by handle (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_handle(&self, handle: &str) -> Result<Option<User>, AppError>;

    /// Lists users ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, AppError>;

    /// Replaces handle and credential of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this identifier.
    /// Returns [`AppError::Conflict`] if the new handle belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace(&self, id: i64, user: NewUser) -> Result<User, AppError>;

    /// Deletes a user and all of their ratings in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<User, AppError>;

    /// Counts all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
