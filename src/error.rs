//! Application error type and its HTTP rendering.
//!
//! Every logical failure is rendered as the `{status, error}` envelope from
//! [`crate::api::dto::UrlResponse`], with a status code matching the error
//! kind. Detailed causes stay in the server logs; clients only see the short
//! fixed messages the handlers choose.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::UrlResponse;

#[derive(Debug)]
pub enum AppError {
    /// Malformed request body or failed input validation.
    BadRequest(String),
    /// Missing or wrong basic auth credentials.
    Unauthorized,
    /// No mapping exists for the requested alias.
    NotFound(String),
    /// The operation conflicts with current state (duplicate alias,
    /// update that changes nothing).
    Conflict(String),
    /// Storage or other internal failure, already logged in full.
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let mut response = (status, Json(UrlResponse::error(message))).into_response();

        if response.status() == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"urlhop\""),
            );
        }

        response
    }
}
