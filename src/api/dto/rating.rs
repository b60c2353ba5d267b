//! DTOs for rating endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewRating, Rating, RatingCategory};

/// Request body for `POST /ratings` and `PUT /ratings/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct RatingRequest {
    #[serde(rename = "tipo")]
    pub category: RatingCategory,

    #[serde(rename = "valor")]
    #[validate(range(min = 1, max = 5))]
    pub value: i32,

    #[serde(rename = "id_clinica")]
    pub clinic_id: i64,

    #[serde(rename = "id_user")]
    pub user_id: i64,
}

impl From<RatingRequest> for NewRating {
    fn from(r: RatingRequest) -> Self {
        NewRating {
            category: r.category,
            value: r.value,
            clinic_id: r.clinic_id,
            user_id: r.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: i64,
    #[serde(rename = "tipo")]
    pub category: RatingCategory,
    #[serde(rename = "valor")]
    pub value: i32,
    #[serde(rename = "id_clinica")]
    pub clinic_id: i64,
    #[serde(rename = "id_user")]
    pub user_id: i64,
    #[serde(rename = "creado")]
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(r: Rating) -> Self {
        RatingResponse {
            id: r.id,
            category: r.category,
            value: r.value,
            clinic_id: r.clinic_id,
            user_id: r.user_id,
            created_at: r.created_at,
        }
    }
}
