//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ClinicRepository`] - Clinic CRUD, name search and database-side averages
//! - [`UserRepository`] - User CRUD
//! - [`RatingRepository`] - Rating CRUD and per-clinic lookups
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod clinic_repository;
pub mod rating_repository;
pub mod user_repository;

pub use clinic_repository::{ClinicFilter, ClinicRepository};
pub use rating_repository::RatingRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use clinic_repository::MockClinicRepository;
#[cfg(test)]
pub use rating_repository::MockRatingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Offset/limit window for list queries.
///
/// `limit: None` returns every row from `offset` on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: Option<i64>,
}

impl PageRequest {
    /// A window covering the whole table.
    pub fn all() -> Self {
        Self::default()
    }

    /// Window for a 1-indexed `page` of `page_size` rows.
    pub fn page(page: i64, page_size: i64) -> Self {
        Self {
            offset: (page - 1) * page_size,
            limit: Some(page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_all() {
        let page = PageRequest::all();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, None);
    }

    #[test]
    fn test_page_request_offsets() {
        assert_eq!(
            PageRequest::page(1, 10),
            PageRequest {
                offset: 0,
                limit: Some(10)
            }
        );
        assert_eq!(
            PageRequest::page(2, 1),
            PageRequest {
                offset: 1,
                limit: Some(1)
            }
        );
    }
}
