#![allow(dead_code)]

use axum_test::{TestRequest, TestServer};
use base64::Engine;
use sqlx::SqlitePool;
use std::sync::Arc;
use urlhop::routes::router;
use urlhop::state::{AdminCredentials, AppState};
use urlhop::storage::SqliteUrlRepository;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "hunter2";

/// `axum-test` has no built-in helper for HTTP Basic auth, so provide one.
pub trait TestRequestBasicAuth {
    fn authorization_basic(self, user: &str, password: &str) -> Self;
}

impl TestRequestBasicAuth for TestRequest {
    fn authorization_basic(self, user: &str, password: &str) -> Self {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
        self.authorization(format!("Basic {encoded}"))
    }
}

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    let storage = SqliteUrlRepository::new(pool);
    storage.init_schema().await.unwrap();

    AppState::new(
        Arc::new(storage),
        AdminCredentials {
            user: ADMIN_USER.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    )
}

/// Full router (including basic auth on `/modify`) behind a test server.
pub async fn create_test_server(pool: SqlitePool) -> TestServer {
    let state = create_test_state(pool).await;
    TestServer::new(router(state)).unwrap()
}

pub async fn insert_mapping(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (alias, url) VALUES (?1, ?2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
