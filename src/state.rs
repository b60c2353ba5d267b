//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClinicService, RatingService, UserService};
use crate::domain::aggregator::AverageStrategy;
use crate::domain::repositories::{ClinicRepository, RatingRepository, UserRepository};
use crate::infrastructure::persistence::{
    PgClinicRepository, PgRatingRepository, PgUserRepository,
};

pub type DynClinicService = ClinicService<dyn ClinicRepository, dyn RatingRepository>;
pub type DynUserService = UserService<dyn UserRepository>;
pub type DynRatingService =
    RatingService<dyn RatingRepository, dyn ClinicRepository, dyn UserRepository>;

/// Services shared by all request handlers.
///
/// Repositories are held behind trait objects, so the same router runs over
/// PostgreSQL in production and over mocks in tests.
#[derive(Clone)]
pub struct AppState {
    pub clinic_service: Arc<DynClinicService>,
    pub user_service: Arc<DynUserService>,
    pub rating_service: Arc<DynRatingService>,
}

impl AppState {
    /// Wires the services over the given repositories.
    pub fn new(
        clinics: Arc<dyn ClinicRepository>,
        users: Arc<dyn UserRepository>,
        ratings: Arc<dyn RatingRepository>,
        strategy: AverageStrategy,
    ) -> Self {
        Self {
            clinic_service: Arc::new(ClinicService::new(
                clinics.clone(),
                ratings.clone(),
                strategy,
            )),
            user_service: Arc::new(UserService::new(users.clone())),
            rating_service: Arc::new(RatingService::new(ratings, clinics, users)),
        }
    }

    /// Wires the services over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>, strategy: AverageStrategy) -> Self {
        Self::new(
            Arc::new(PgClinicRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgRatingRepository::new(pool)),
            strategy,
        )
    }
}
