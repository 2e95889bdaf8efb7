//! Basic auth middleware for the `/modify` routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests against the configured admin credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if
/// the header is missing, malformed, or the credentials do not match.
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized())?;

    let req = Request::from_parts(parts, body);

    let password = password.unwrap_or_default();

    if user != state.admin.user || password != state.admin.password {
        tracing::warn!(user = %user, "rejected basic auth attempt");
        return Err(AppError::unauthorized());
    }

    Ok(next.run(req).await)
}
