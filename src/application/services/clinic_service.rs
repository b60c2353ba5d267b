//! Clinic management and rating averages.

use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::aggregator::{
    AverageStrategy, CategoryAverages, average_by_category, average_ratings,
};
use crate::domain::entities::{Clinic, ClinicSummary, NewClinic};
use crate::domain::repositories::{ClinicFilter, ClinicRepository, PageRequest, RatingRepository};
use crate::error::AppError;
use crate::utils::website::validate_website;

/// Service for clinic CRUD and rating averages.
///
/// Reads return [`ClinicSummary`] values: the clinic plus its per-category
/// averages. Where those averages are computed depends on the configured
/// [`AverageStrategy`]; both strategies yield the same numbers.
pub struct ClinicService<C, R>
where
    C: ClinicRepository + ?Sized,
    R: RatingRepository + ?Sized,
{
    clinics: Arc<C>,
    ratings: Arc<R>,
    strategy: AverageStrategy,
}

impl<C, R> ClinicService<C, R>
where
    C: ClinicRepository + ?Sized,
    R: RatingRepository + ?Sized,
{
    /// Creates a new clinic service.
    pub fn new(clinics: Arc<C>, ratings: Arc<R>, strategy: AverageStrategy) -> Self {
        Self {
            clinics,
            ratings,
            strategy,
        }
    }

    /// Lists clinics with their averages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clinics(&self, page: PageRequest) -> Result<Vec<ClinicSummary>, AppError> {
        self.summaries(ClinicFilter::new(page)).await
    }

    /// Lists clinics whose name contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `term` is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_clinics(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<Vec<ClinicSummary>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::bad_request(
                "Search term must not be empty",
                json!({ "param": "term" }),
            ));
        }

        self.summaries(ClinicFilter::new(page).with_name(term)).await
    }

    /// Retrieves one clinic with its averages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the clinic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_clinic(&self, id: i64) -> Result<ClinicSummary, AppError> {
        let summary = match self.strategy {
            AverageStrategy::Database => self.clinics.find_summary(id).await?,
            AverageStrategy::InMemory => match self.clinics.find_by_id(id).await? {
                Some(clinic) => {
                    let ratings = self.ratings.list_by_clinic(id).await?;
                    Some(ClinicSummary {
                        clinic,
                        averages: average_ratings(&ratings),
                    })
                }
                None => None,
            },
        };

        summary.ok_or_else(|| AppError::not_found("Clinic not found", json!({ "id": id })))
    }

    /// Creates a clinic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_clinic(&self, new_clinic: NewClinic) -> Result<Clinic, AppError> {
        validate_clinic(&new_clinic)?;

        let clinic = self.clinics.create(new_clinic).await?;
        tracing::info!(clinic_id = clinic.id, name = %clinic.name, "Clinic created");

        Ok(clinic)
    }

    /// Replaces every field of a clinic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is invalid.
    /// Returns [`AppError::NotFound`] if the clinic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_clinic(&self, id: i64, clinic: NewClinic) -> Result<Clinic, AppError> {
        validate_clinic(&clinic)?;
        self.clinics.replace(id, clinic).await
    }

    /// Deletes a clinic together with its ratings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the clinic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_clinic(&self, id: i64) -> Result<Clinic, AppError> {
        let clinic = self.clinics.delete(id).await?;
        tracing::info!(clinic_id = id, "Clinic deleted");

        Ok(clinic)
    }

    /// Counts all clinics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_clinics(&self) -> Result<i64, AppError> {
        self.clinics.count().await
    }

    async fn summaries(&self, filter: ClinicFilter) -> Result<Vec<ClinicSummary>, AppError> {
        match self.strategy {
            AverageStrategy::Database => self.clinics.list_summaries(filter).await,
            AverageStrategy::InMemory => {
                let clinics = self.clinics.list(filter).await?;
                let ids: Vec<i64> = clinics.iter().map(|c| c.id).collect();
                let ratings = self.ratings.list_by_clinics(&ids).await?;

                let mut by_clinic: HashMap<i64, Vec<_>> = HashMap::new();
                for rating in ratings {
                    by_clinic
                        .entry(rating.clinic_id)
                        .or_default()
                        .push((rating.category, rating.value));
                }

                Ok(clinics
                    .into_iter()
                    .map(|clinic| {
                        let averages = by_clinic
                            .remove(&clinic.id)
                            .map(average_by_category)
                            .unwrap_or_else(CategoryAverages::empty);
                        ClinicSummary { clinic, averages }
                    })
                    .collect())
            }
        }
    }
}

/// Field checks that go beyond what the request DTO can express.
fn validate_clinic(clinic: &NewClinic) -> Result<(), AppError> {
    for (field, value) in [
        ("nombre", &clinic.name),
        ("direccion", &clinic.address),
        ("localidad", &clinic.locality),
        ("telefono", &clinic.phone),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::bad_request(
                "Field must not be blank",
                json!({ "field": field }),
            ));
        }
    }

    if let Some(website) = &clinic.website
        && let Err(e) = validate_website(website)
    {
        return Err(AppError::bad_request(
            "Invalid website",
            json!({ "field": "web", "reason": e.to_string() }),
        ));
    }

    Ok(())
}
