#![allow(dead_code)]

use axum_test::TestServer;
use clinic_ratings::domain::aggregator::AverageStrategy;
use clinic_ratings::routes::router;
use clinic_ratings::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_clinic(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clinics (name, funding, address, locality, phone)
         VALUES ($1, 'publico', 'Calle Falsa 123', 'Rosario', '341 555 0000')
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_user(pool: &PgPool, handle: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (handle, credential_hash) VALUES ($1, repeat('0', 64)) RETURNING id",
    )
    .bind(handle)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a rating; `category` is the wire name (`instalaciones`, `medicos`, `servicio`).
pub async fn create_test_rating(
    pool: &PgPool,
    clinic_id: i64,
    user_id: i64,
    category: &str,
    value: i32,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ratings (category, value, clinic_id, user_id)
         VALUES ($1::rating_category, $2, $3, $4)
         RETURNING id",
    )
    .bind(category)
    .bind(value)
    .bind(clinic_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_ratings_for_clinic(pool: &PgPool, clinic_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE clinic_id = $1")
        .bind(clinic_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool, strategy: AverageStrategy) -> AppState {
    AppState::from_pool(Arc::new(pool), strategy)
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool, AverageStrategy::Database);
    TestServer::new(router(state, &[])).unwrap()
}

/// Polls until some other session of this test database is waiting on a row lock.
pub async fn wait_for_lock_waiter(pool: &PgPool) {
    for _ in 0..500 {
        let waiting: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pg_stat_activity
             WHERE datname = current_database() AND wait_event_type = 'Lock'",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        if waiting > 0 {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("no session started waiting on a lock");
}
