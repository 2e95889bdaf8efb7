//! Handler for removing alias-to-URL mappings.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};

use crate::api::dto::{DeleteRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;

/// Removes the mapping for an alias.
///
/// # Endpoint
///
/// `POST /modify/delete-url`
///
/// # Errors
///
/// - Undecodable body → 400 `cannot decode request body`
/// - Unknown alias → 404 `url not found`
/// - Storage failure → 500 `cannot delete url`
pub async fn delete_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "cannot decode request body");
        AppError::bad_request("cannot decode request body")
    })?;

    match state.storage.delete_url(&request.alias).await {
        Ok(()) => {
            info!(alias = %request.alias, "url deleted");
            Ok(Json(UrlResponse::ok(request.alias)))
        }
        Err(StorageError::NotFound) => {
            error!(alias = %request.alias, "url not found");
            Err(AppError::not_found("url not found"))
        }
        Err(e) => {
            error!(alias = %request.alias, error = %e, "cannot delete url");
            Err(AppError::internal("cannot delete url"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AdminCredentials;
    use crate::storage::MockUrlRepository;
    use axum::http::StatusCode;
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn test_server(mock: MockUrlRepository) -> TestServer {
        let state = AppState::new(
            Arc::new(mock),
            AdminCredentials {
                user: "admin".to_string(),
                password: "secret".to_string(),
            },
        );

        let app = Router::new()
            .route("/modify/delete-url", post(delete_handler))
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_delete_storage_failure_is_generic() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url()
            .returning(|_| Err(StorageError::Database(sqlx::Error::PoolClosed)));

        let server = test_server(mock);
        let response = server
            .post("/modify/delete-url")
            .json(&json!({"alias": "abc1234"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "cannot delete url");
    }
}
