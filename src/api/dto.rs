//! Request and response shapes for the HTTP API.
//!
//! All endpoints share the [`UrlResponse`] envelope: `status` is `"OK"` or
//! `"ERROR"`, and `error` / `alias` appear only when set.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "ERROR";

/// Body of `POST /modify/save-url`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Redirect target. Must be a syntactically valid URL.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Requested alias. When absent or blank, one is generated.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Body of `POST /modify/update-url`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub url: String,
    pub alias: String,
}

/// Body of `POST /modify/delete-url`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub alias: String,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl UrlResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            error: None,
            alias: Some(alias.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            error: Some(message.into()),
            alias: None,
        }
    }
}
