//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /usuarios` and `PUT /usuarios/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 20))]
    pub handle: String,

    #[serde(rename = "pwd")]
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// User representation returned by the API. The credential never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub handle: String,
    #[serde(rename = "creado")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            handle: u.handle,
            created_at: u.created_at,
        }
    }
}
