mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/usuarios")
        .json(&json!({ "handle": "ana", "pwd": "secreto" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["handle"], "ana");
    assert!(body.get("pwd").is_none());

    let stored: String = sqlx::query_scalar("SELECT credential_hash FROM users WHERE handle = 'ana'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "secreto");
    assert_eq!(stored.len(), 64);
}

#[sqlx::test]
async fn test_duplicate_handle_conflict(pool: PgPool) {
    common::create_test_user(&pool, "ana").await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/usuarios")
        .json(&json!({ "handle": "ana", "pwd": "otra" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_user_missing_password(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/usuarios")
        .json(&json!({ "handle": "ana" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_get_and_list_users(pool: PgPool) {
    let ana = common::create_test_user(&pool, "ana").await;
    common::create_test_user(&pool, "bruno").await;
    let server = common::create_test_server(pool);

    let one = server.get(&format!("/usuarios/{ana}")).await;
    one.assert_status_ok();
    assert_eq!(one.json::<Value>()["handle"], "ana");

    let all = server.get("/usuarios").await.json::<Value>();
    assert_eq!(all.as_array().unwrap().len(), 2);

    server.get("/usuarios/777").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_replace_user_to_taken_handle(pool: PgPool) {
    let ana = common::create_test_user(&pool, "ana").await;
    common::create_test_user(&pool, "bruno").await;
    let server = common::create_test_server(pool);

    let response = server
        .put(&format!("/usuarios/{ana}"))
        .json(&json!({ "handle": "bruno", "pwd": "x" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let renamed = server
        .put(&format!("/usuarios/{ana}"))
        .json(&json!({ "handle": "ana_maria", "pwd": "x" }))
        .await;
    renamed.assert_status_ok();
    assert_eq!(renamed.json::<Value>()["handle"], "ana_maria");
}

#[sqlx::test]
async fn test_replace_missing_user_is_not_found(pool: PgPool) {
    common::create_test_user(&pool, "ana").await;
    let server = common::create_test_server(pool);

    let response = server
        .put("/usuarios/999")
        .json(&json!({ "handle": "ana", "pwd": "x" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_delete_user_cascades(pool: PgPool) {
    let clinic_id = common::create_test_clinic(&pool, "Central").await;
    let user_id = common::create_test_user(&pool, "ana").await;
    let rating_id = common::create_test_rating(&pool, clinic_id, user_id, "medicos", 5).await;
    let server = common::create_test_server(pool);

    let response = server.delete(&format!("/usuarios/{user_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], user_id);

    server
        .get(&format!("/ratings/{rating_id}"))
        .await
        .assert_status_not_found();
}
