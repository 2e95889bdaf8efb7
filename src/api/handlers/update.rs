//! Handler for replacing the URL behind an existing alias.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};

use crate::api::dto::{UpdateRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;

/// Replaces the URL stored for an alias. The alias itself never changes.
///
/// # Endpoint
///
/// `POST /modify/update-url`
///
/// # Errors
///
/// - Undecodable body → 400 `cannot decode request body`
/// - Unknown alias → 404 `url not found`
/// - URL equal to the stored one → 409 `url is not modified`
/// - Storage failure → 500 `cannot update url`
pub async fn update_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "cannot decode request body");
        AppError::bad_request("cannot decode request body")
    })?;

    match state.storage.update_url(&request.url, &request.alias).await {
        Ok(()) => {
            info!(alias = %request.alias, url = %request.url, "url updated");
            Ok(Json(UrlResponse::ok(request.alias)))
        }
        Err(StorageError::NotFound) => {
            error!(alias = %request.alias, "url not found");
            Err(AppError::not_found("url not found"))
        }
        Err(StorageError::Unchanged) => {
            error!(alias = %request.alias, "url is not modified");
            Err(AppError::conflict("url is not modified"))
        }
        Err(e) => {
            error!(alias = %request.alias, error = %e, "cannot update url");
            Err(AppError::internal("cannot update url"))
        }
    }
}
