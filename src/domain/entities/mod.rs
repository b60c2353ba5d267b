//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. The two enumerations ([`FundingType`], [`RatingCategory`]) are
//! shared by every layer and carry their own serde and sqlx mappings.
//!
//! # Entity Types
//!
//! - [`Clinic`] - A rated medical facility
//! - [`User`] - Someone who rates clinics
//! - [`Rating`] - One 1-5 score in one category
//!
//! # Design Pattern
//!
//! Each entity has a `New*` companion holding the client-supplied fields.
//! It is used both for creation and for full-record replacement.

pub mod clinic;
pub mod rating;
pub mod user;

pub use clinic::{Clinic, ClinicSummary, FundingType, NewClinic};
pub use rating::{NewRating, Rating, RatingCategory};
pub use user::{NewUser, User};
