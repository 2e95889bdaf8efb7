//! Handler for creating alias-to-URL mappings.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::{SaveRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;
use crate::utils::alias::{DEFAULT_ALIAS_LENGTH, random_alias};

/// Creates a mapping from an alias to a URL.
///
/// # Endpoint
///
/// `POST /modify/save-url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "my-link"   // optional; generated when absent or blank
/// }
/// ```
///
/// # Errors
///
/// - Undecodable body → 400 `cannot decode request body`
/// - Invalid URL → 400 `invalid request body`
/// - Alias taken → 409 `url already exists`
/// - Storage failure → 500 `cannot save url`
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "cannot decode request body");
        AppError::bad_request("cannot decode request body")
    })?;

    if let Err(e) = request.validate() {
        error!(error = %e, "invalid request body");
        return Err(AppError::bad_request("invalid request body"));
    }

    let alias = match request.alias.as_deref() {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ => random_alias(DEFAULT_ALIAS_LENGTH),
    };

    match state.storage.save_url(&request.url, &alias).await {
        Ok(()) => {
            info!(alias = %alias, "url saved");
            Ok(Json(UrlResponse::ok(alias)))
        }
        Err(StorageError::AliasExists) => {
            error!(alias = %alias, "url already exists");
            Err(AppError::conflict("url already exists"))
        }
        Err(e) => {
            error!(alias = %alias, error = %e, "cannot save url");
            Err(AppError::internal("cannot save url"))
        }
    }
}
