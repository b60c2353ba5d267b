//! Rating entity: a single 1-5 score a user gives a clinic in one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aspect of a clinic being rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rating_category")]
pub enum RatingCategory {
    #[serde(rename = "instalaciones")]
    #[sqlx(rename = "instalaciones")]
    Facilities,
    #[serde(rename = "medicos")]
    #[sqlx(rename = "medicos")]
    MedicalStaff,
    #[serde(rename = "servicio")]
    #[sqlx(rename = "servicio")]
    Service,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 3] = [Self::Facilities, Self::MedicalStaff, Self::Service];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facilities => "instalaciones",
            Self::MedicalStaff => "medicos",
            Self::Service => "servicio",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub category: RatingCategory,
    pub value: i32,
    pub clinic_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// Lowest accepted score.
    pub const MIN_VALUE: i32 = 1;
    /// Highest accepted score.
    pub const MAX_VALUE: i32 = 5;

    /// Returns true if `value` is an acceptable score.
    pub fn is_valid_value(value: i32) -> bool {
        (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value)
    }
}

/// Field set for creating a rating or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub category: RatingCategory,
    pub value: i32,
    pub clinic_id: i64,
    pub user_id: i64,
}
