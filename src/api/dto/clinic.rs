//! DTOs for clinic endpoints.
//!
//! Wire field names follow the public API (`nombre`, `financ`, ...); the Rust
//! field names follow the domain model.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::aggregator::CategoryAverages;
use crate::domain::entities::{Clinic, ClinicSummary, FundingType, NewClinic};

/// Digits with optional `+`, spaces, hyphens and parentheses.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]{6,20}$").expect("phone regex is valid"));

/// Request body for `POST /clinicas` and `PUT /clinicas/{id}`.
///
/// `PUT` replaces every field: omitted optional fields are cleared.
#[derive(Debug, Deserialize, Validate)]
pub struct ClinicRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,

    #[serde(rename = "financ")]
    pub funding: FundingType,

    #[serde(rename = "direccion")]
    #[validate(length(min = 1, max = 150))]
    pub address: String,

    #[serde(rename = "localidad")]
    #[validate(length(min = 1, max = 50))]
    pub locality: String,

    #[serde(rename = "telefono")]
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[serde(default, rename = "web")]
    #[validate(length(max = 255))]
    pub website: Option<String>,

    #[serde(default, rename = "imagen")]
    #[validate(length(max = 255))]
    pub image: Option<String>,
}

impl From<ClinicRequest> for NewClinic {
    fn from(r: ClinicRequest) -> Self {
        NewClinic {
            name: r.name,
            funding: r.funding,
            address: r.address,
            locality: r.locality,
            phone: r.phone,
            website: r.website,
            image: r.image,
        }
    }
}

/// Per-category averages as exposed by the API. `null` means no ratings.
#[derive(Debug, Serialize)]
pub struct AveragesResponse {
    pub promedio_inst: Option<f64>,
    pub promedio_medi: Option<f64>,
    pub promedio_serv: Option<f64>,
}

impl From<CategoryAverages> for AveragesResponse {
    fn from(a: CategoryAverages) -> Self {
        AveragesResponse {
            promedio_inst: a.facilities,
            promedio_medi: a.medical_staff,
            promedio_serv: a.service,
        }
    }
}

/// Clinic representation returned by the API.
///
/// `promedios` is present on reads and absent on write responses.
#[derive(Debug, Serialize)]
pub struct ClinicResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "financ")]
    pub funding: FundingType,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "localidad")]
    pub locality: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "web")]
    pub website: Option<String>,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "creado")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promedios: Option<AveragesResponse>,
}

impl From<Clinic> for ClinicResponse {
    fn from(c: Clinic) -> Self {
        ClinicResponse {
            id: c.id,
            name: c.name,
            funding: c.funding,
            address: c.address,
            locality: c.locality,
            phone: c.phone,
            website: c.website,
            image: c.image,
            created_at: c.created_at,
            promedios: None,
        }
    }
}

impl From<ClinicSummary> for ClinicResponse {
    fn from(s: ClinicSummary) -> Self {
        ClinicResponse {
            promedios: Some(s.averages.into()),
            ..ClinicResponse::from(s.clinic)
        }
    }
}
