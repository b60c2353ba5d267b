mod common;

use clinic_ratings::domain::entities::{NewRating, RatingCategory};
use clinic_ratings::domain::repositories::{PageRequest, RatingRepository};
use clinic_ratings::error::AppError;
use clinic_ratings::infrastructure::persistence::PgRatingRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_find_rating(pool: PgPool) {
    let clinic_id = common::create_test_clinic(&pool, "Central").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    let repo = PgRatingRepository::new(Arc::new(pool));

    let created = repo
        .create(NewRating {
            category: RatingCategory::MedicalStaff,
            value: 4,
            clinic_id,
            user_id,
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.category, RatingCategory::MedicalStaff);
    assert_eq!(found.value, 4);
}

#[sqlx::test]
async fn test_missing_clinic_reference_is_validation_error(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "ana").await;
    let repo = PgRatingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewRating {
            category: RatingCategory::Service,
            value: 3,
            clinic_id: 999,
            user_id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_value_out_of_range_is_validation_error(pool: PgPool) {
    let clinic_id = common::create_test_clinic(&pool, "Central").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    let repo = PgRatingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewRating {
            category: RatingCategory::Service,
            value: 6,
            clinic_id,
            user_id,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_list_by_clinic(pool: PgPool) {
    let central = common::create_test_clinic(&pool, "Central").await;
    let norte = common::create_test_clinic(&pool, "Norte").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    let r1 = common::create_test_rating(&pool, central, user_id, "instalaciones", 4).await;
    let r2 = common::create_test_rating(&pool, central, user_id, "servicio", 2).await;
    common::create_test_rating(&pool, norte, user_id, "medicos", 5).await;

    let repo = PgRatingRepository::new(Arc::new(pool));

    let ids: Vec<i64> = repo
        .list_by_clinic(central)
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![r1, r2]);

    let both = repo.list_by_clinics(&[central, norte]).await.unwrap();
    assert_eq!(both.len(), 3);

    assert!(repo.list_by_clinics(&[]).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_list_ratings_paginated(pool: PgPool) {
    let clinic_id = common::create_test_clinic(&pool, "Central").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    for value in 1..=5 {
        common::create_test_rating(&pool, clinic_id, user_id, "servicio", value).await;
    }

    let repo = PgRatingRepository::new(Arc::new(pool));

    assert_eq!(repo.list(PageRequest::all()).await.unwrap().len(), 5);

    let page = repo.list(PageRequest::page(2, 2)).await.unwrap();
    let values: Vec<i32> = page.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![3, 4]);

    assert_eq!(repo.count().await.unwrap(), 5);
}

#[sqlx::test]
async fn test_replace_and_delete_rating(pool: PgPool) {
    let clinic_id = common::create_test_clinic(&pool, "Central").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    let id = common::create_test_rating(&pool, clinic_id, user_id, "servicio", 2).await;

    let repo = PgRatingRepository::new(Arc::new(pool));

    let replaced = repo
        .replace(
            id,
            NewRating {
                category: RatingCategory::Facilities,
                value: 5,
                clinic_id,
                user_id,
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.category, RatingCategory::Facilities);
    assert_eq!(replaced.value, 5);

    let deleted = repo.delete(id).await.unwrap();
    assert_eq!(deleted.id, id);
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    assert!(matches!(
        repo.delete(id).await,
        Err(AppError::NotFound { .. })
    ));
}
