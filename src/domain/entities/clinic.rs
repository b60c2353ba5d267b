//! Clinic entity representing a rated medical facility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::aggregator::CategoryAverages;

/// How a clinic is funded.
///
/// Stored as the PostgreSQL enum `funding_type`; the wire and database
/// values are the same lowercase Spanish words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "funding_type")]
pub enum FundingType {
    #[serde(rename = "publico")]
    #[sqlx(rename = "publico")]
    Public,
    #[serde(rename = "privado")]
    #[sqlx(rename = "privado")]
    Private,
    #[serde(rename = "mixto")]
    #[sqlx(rename = "mixto")]
    Mixed,
}

impl FundingType {
    pub const ALL: [FundingType; 3] = [Self::Public, Self::Private, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "publico",
            Self::Private => "privado",
            Self::Mixed => "mixto",
        }
    }
}

impl fmt::Display for FundingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A medical clinic.
#[derive(Debug, Clone, PartialEq)]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    pub funding: FundingType,
    pub address: String,
    pub locality: String,
    pub phone: String,
    pub website: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Field set for creating a clinic or fully replacing an existing one.
///
/// Updates are whole-record replacements, so the same struct serves both.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClinic {
    pub name: String,
    pub funding: FundingType,
    pub address: String,
    pub locality: String,
    pub phone: String,
    pub website: Option<String>,
    pub image: Option<String>,
}

/// A clinic together with its per-category rating averages.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicSummary {
    pub clinic: Clinic,
    pub averages: CategoryAverages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_type_wire_names() {
        assert_eq!(
            serde_json::to_value(FundingType::Public).unwrap(),
            serde_json::json!("publico")
        );
        assert_eq!(
            serde_json::from_str::<FundingType>(r#""mixto""#).unwrap(),
            FundingType::Mixed
        );
        assert!(serde_json::from_str::<FundingType>(r#""public""#).is_err());
    }

    #[test]
    fn test_funding_type_display_matches_serde() {
        for funding in FundingType::ALL {
            let json = serde_json::to_value(funding).unwrap();
            assert_eq!(json.as_str().unwrap(), funding.to_string());
        }
    }
}
