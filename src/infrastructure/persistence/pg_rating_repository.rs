//! PostgreSQL implementation of rating repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRating, Rating, RatingCategory};
use crate::domain::repositories::{PageRequest, RatingRepository};
use crate::error::AppError;

/// PostgreSQL repository for ratings.
///
/// The value range and both references are also enforced by the schema
/// (`ratings_value_range` check, foreign keys); violations surface as
/// [`AppError::Validation`].
pub struct PgRatingRepository {
    pool: Arc<PgPool>,
}

impl PgRatingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RatingRow {
    id: i64,
    category: RatingCategory,
    value: i32,
    clinic_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl From<RatingRow> for Rating {
    fn from(r: RatingRow) -> Self {
        Rating {
            id: r.id,
            category: r.category,
            value: r.value,
            clinic_id: r.clinic_id,
            user_id: r.user_id,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    async fn create(&self, new_rating: NewRating) -> Result<Rating, AppError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            INSERT INTO ratings (category, value, clinic_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, category, value, clinic_id, user_id, created_at
            "#,
        )
        .bind(new_rating.category)
        .bind(new_rating.value)
        .bind(new_rating.clinic_id)
        .bind(new_rating.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Rating>, AppError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, category, value, clinic_id, user_id, created_at
            FROM ratings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rating::from))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Rating>, AppError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, category, value, clinic_id, user_id, created_at
            FROM ratings
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn list_by_clinic(&self, clinic_id: i64) -> Result<Vec<Rating>, AppError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, category, value, clinic_id, user_id, created_at
            FROM ratings
            WHERE clinic_id = $1
            ORDER BY id
            "#,
        )
        .bind(clinic_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn list_by_clinics(&self, clinic_ids: &[i64]) -> Result<Vec<Rating>, AppError> {
        if clinic_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT id, category, value, clinic_id, user_id, created_at
            FROM ratings
            WHERE clinic_id = ANY($1)
            ORDER BY clinic_id, id
            "#,
        )
        .bind(clinic_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn replace(&self, id: i64, rating: NewRating) -> Result<Rating, AppError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            UPDATE ratings SET
                category  = $2,
                value     = $3,
                clinic_id = $4,
                user_id   = $5
            WHERE id = $1
            RETURNING id, category, value, clinic_id, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(rating.category)
        .bind(rating.value)
        .bind(rating.clinic_id)
        .bind(rating.user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Rating::from)
            .ok_or_else(|| AppError::not_found("Rating not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<Rating, AppError> {
        let row = sqlx::query_as::<_, RatingRow>(
            r#"
            DELETE FROM ratings
            WHERE id = $1
            RETURNING id, category, value, clinic_id, user_id, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Rating::from)
            .ok_or_else(|| AppError::not_found("Rating not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
