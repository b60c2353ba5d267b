//! Body of `GET /health`.

use serde::Serialize;

/// Overall status (`healthy` or `degraded`), crate version and per-dependency results.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// The service depends only on PostgreSQL.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// `ok` or `error`, plus a clinic count or the failure text.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
