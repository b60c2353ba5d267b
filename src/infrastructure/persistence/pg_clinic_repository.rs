//! PostgreSQL implementation of clinic repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::aggregator::CategoryAverages;
use crate::domain::entities::{Clinic, ClinicSummary, FundingType, NewClinic};
use crate::domain::repositories::{ClinicFilter, ClinicRepository};
use crate::error::AppError;
use crate::utils::like_pattern::contains_pattern;

/// PostgreSQL repository for clinics.
///
/// Averages are computed with one conditional aggregate per category over a
/// `LEFT JOIN` on `ratings`, so clinics without ratings still appear with
/// `NULL` averages. Averaging `value::float8` divides the exact integer sum
/// by the count in double precision, matching the in-memory fold.
pub struct PgClinicRepository {
    pool: Arc<PgPool>,
}

impl PgClinicRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClinicRow {
    id: i64,
    name: String,
    funding: FundingType,
    address: String,
    locality: String,
    phone: String,
    website: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ClinicRow> for Clinic {
    fn from(r: ClinicRow) -> Self {
        Clinic {
            id: r.id,
            name: r.name,
            funding: r.funding,
            address: r.address,
            locality: r.locality,
            phone: r.phone,
            website: r.website,
            image: r.image,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClinicSummaryRow {
    #[sqlx(flatten)]
    clinic: ClinicRow,
    avg_facilities: Option<f64>,
    avg_medical_staff: Option<f64>,
    avg_service: Option<f64>,
}

impl From<ClinicSummaryRow> for ClinicSummary {
    fn from(r: ClinicSummaryRow) -> Self {
        ClinicSummary {
            clinic: r.clinic.into(),
            averages: CategoryAverages {
                facilities: r.avg_facilities,
                medical_staff: r.avg_medical_staff,
                service: r.avg_service,
            },
        }
    }
}

const SUMMARY_SELECT: &str = r#"
    SELECT
        c.id, c.name, c.funding, c.address, c.locality, c.phone,
        c.website, c.image, c.created_at,
        AVG(r.value::float8) FILTER (WHERE r.category = 'instalaciones') AS avg_facilities,
        AVG(r.value::float8) FILTER (WHERE r.category = 'medicos')       AS avg_medical_staff,
        AVG(r.value::float8) FILTER (WHERE r.category = 'servicio')      AS avg_service
    FROM clinics c
    LEFT JOIN ratings r ON r.clinic_id = c.id
"#;

#[async_trait]
impl ClinicRepository for PgClinicRepository {
    async fn create(&self, new_clinic: NewClinic) -> Result<Clinic, AppError> {
        let row = sqlx::query_as::<_, ClinicRow>(
            r#"
            INSERT INTO clinics (name, funding, address, locality, phone, website, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, funding, address, locality, phone, website, image, created_at
            "#,
        )
        .bind(new_clinic.name)
        .bind(new_clinic.funding)
        .bind(new_clinic.address)
        .bind(new_clinic.locality)
        .bind(new_clinic.phone)
        .bind(new_clinic.website)
        .bind(new_clinic.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Clinic>, AppError> {
        let row = sqlx::query_as::<_, ClinicRow>(
            r#"
            SELECT id, name, funding, address, locality, phone, website, image, created_at
            FROM clinics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Clinic::from))
    }

    async fn list(&self, filter: ClinicFilter) -> Result<Vec<Clinic>, AppError> {
        let pattern = filter.name_contains.as_deref().map(contains_pattern);

        let rows = sqlx::query_as::<_, ClinicRow>(
            r#"
            SELECT id, name, funding, address, locality, phone, website, image, created_at
            FROM clinics
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(filter.page.limit)
        .bind(filter.page.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Clinic::from).collect())
    }

    async fn find_summary(&self, id: i64) -> Result<Option<ClinicSummary>, AppError> {
        let query = format!("{SUMMARY_SELECT} WHERE c.id = $1 GROUP BY c.id");

        let row = sqlx::query_as::<_, ClinicSummaryRow>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(ClinicSummary::from))
    }

    async fn list_summaries(&self, filter: ClinicFilter) -> Result<Vec<ClinicSummary>, AppError> {
        let pattern = filter.name_contains.as_deref().map(contains_pattern);
        let query = format!(
            "{SUMMARY_SELECT}
            WHERE ($1::text IS NULL OR c.name ILIKE $1)
            GROUP BY c.id
            ORDER BY c.id
            LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, ClinicSummaryRow>(&query)
            .bind(pattern)
            .bind(filter.page.limit)
            .bind(filter.page.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ClinicSummary::from).collect())
    }

    async fn replace(&self, id: i64, clinic: NewClinic) -> Result<Clinic, AppError> {
        let row = sqlx::query_as::<_, ClinicRow>(
            r#"
            UPDATE clinics SET
                name     = $2,
                funding  = $3,
                address  = $4,
                locality = $5,
                phone    = $6,
                website  = $7,
                image    = $8
            WHERE id = $1
            RETURNING id, name, funding, address, locality, phone, website, image, created_at
            "#,
        )
        .bind(id)
        .bind(clinic.name)
        .bind(clinic.funding)
        .bind(clinic.address)
        .bind(clinic.locality)
        .bind(clinic.phone)
        .bind(clinic.website)
        .bind(clinic.image)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Clinic::from)
            .ok_or_else(|| AppError::not_found("Clinic not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<Clinic, AppError> {
        let mut tx = self.pool.begin().await?;

        // Blocks rating inserts for this row until commit.
        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM clinics WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Err(AppError::not_found("Clinic not found", json!({ "id": id })));
        }

        let removed = sqlx::query("DELETE FROM ratings WHERE clinic_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let row = sqlx::query_as::<_, ClinicRow>(
            r#"
            DELETE FROM clinics
            WHERE id = $1
            RETURNING id, name, funding, address, locality, phone, website, image, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(AppError::not_found("Clinic not found", json!({ "id": id })));
        };

        tx.commit().await?;
        tracing::debug!(clinic_id = id, ratings_removed = removed, "Clinic deleted");

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clinics")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
