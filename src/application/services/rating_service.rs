//! Rating management service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewRating, Rating};
use crate::domain::repositories::{ClinicRepository, PageRequest, RatingRepository, UserRepository};
use crate::error::AppError;

/// Service for managing ratings.
///
/// Every create and replace checks that the value is within range and that
/// the referenced clinic and user exist before touching the store.
pub struct RatingService<R, C, U>
where
    R: RatingRepository + ?Sized,
    C: ClinicRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    ratings: Arc<R>,
    clinics: Arc<C>,
    users: Arc<U>,
}

impl<R, C, U> RatingService<R, C, U>
where
    R: RatingRepository + ?Sized,
    C: ClinicRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Creates a new rating service.
    pub fn new(ratings: Arc<R>, clinics: Arc<C>, users: Arc<U>) -> Self {
        Self {
            ratings,
            clinics,
            users,
        }
    }

    /// Lists ratings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_ratings(&self, page: PageRequest) -> Result<Vec<Rating>, AppError> {
        self.ratings.list(page).await
    }

    /// Lists every rating of one clinic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the clinic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_clinic(&self, clinic_id: i64) -> Result<Vec<Rating>, AppError> {
        if self.clinics.find_by_id(clinic_id).await?.is_none() {
            return Err(AppError::not_found(
                "Clinic not found",
                json!({ "id_clinica": clinic_id }),
            ));
        }

        self.ratings.list_by_clinic(clinic_id).await
    }

    /// Retrieves a rating by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rating does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_rating(&self, id: i64) -> Result<Rating, AppError> {
        self.ratings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Rating not found", json!({ "id": id })))
    }

    /// Records a new rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is out of range or a
    /// referenced clinic or user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_rating(&self, new_rating: NewRating) -> Result<Rating, AppError> {
        self.check(&new_rating).await?;

        let rating = self.ratings.create(new_rating).await?;
        tracing::info!(
            rating_id = rating.id,
            clinic_id = rating.clinic_id,
            category = %rating.category,
            value = rating.value,
            "Rating created"
        );

        Ok(rating)
    }

    /// Replaces every field of a rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rating does not exist, before
    /// any other check.
    /// Returns [`AppError::Validation`] if the value is out of range or a
    /// referenced clinic or user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_rating(&self, id: i64, rating: NewRating) -> Result<Rating, AppError> {
        self.get_rating(id).await?;
        self.check(&rating).await?;
        self.ratings.replace(id, rating).await
    }

    /// Deletes a rating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rating does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_rating(&self, id: i64) -> Result<Rating, AppError> {
        self.ratings.delete(id).await
    }

    /// Counts all ratings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_ratings(&self) -> Result<i64, AppError> {
        self.ratings.count().await
    }

    async fn check(&self, rating: &NewRating) -> Result<(), AppError> {
        if !Rating::is_valid_value(rating.value) {
            return Err(AppError::bad_request(
                "Rating value out of range",
                json!({ "valor": rating.value, "min": Rating::MIN_VALUE, "max": Rating::MAX_VALUE }),
            ));
        }

        if self.clinics.find_by_id(rating.clinic_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Referenced clinic does not exist",
                json!({ "id_clinica": rating.clinic_id }),
            ));
        }

        if self.users.find_by_id(rating.user_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Referenced user does not exist",
                json!({ "id_user": rating.user_id }),
            ));
        }

        Ok(())
    }
}
