//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// - Empty alias → 400 with an error envelope
/// - Unknown alias → 404 with an error envelope (no redirect)
/// - Storage failure → 500 with an error envelope
///
/// On success, responds `302 Found` with the stored URL in `Location`.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if alias.is_empty() {
        error!("alias is empty");
        return Err(AppError::bad_request("alias is empty"));
    }

    match state.storage.get_url(&alias).await {
        Ok(url) => {
            info!(alias = %alias, url = %url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
        }
        Err(StorageError::NotFound) => {
            error!(alias = %alias, "url not found");
            Err(AppError::not_found("url not found"))
        }
        Err(e) => {
            error!(alias = %alias, error = %e, "cannot get url");
            Err(AppError::internal("cannot get url"))
        }
    }
}
