//! User entity representing someone who rates clinics.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// The credential is kept only as a hex-encoded SHA-256 digest and is never
/// exposed through the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub handle: String,
    pub credential_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Field set for creating a user or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub handle: String,
    pub credential_hash: String,
}
