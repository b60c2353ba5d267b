//! Utility functions shared across layers.
//!
//! - [`credential`] - Credential hashing for stored users
//! - [`like_pattern`] - Escaping user input for `ILIKE` searches
//! - [`website`] - Clinic website validation

pub mod credential;
pub mod like_pattern;
pub mod website;
