//! HTTP layer: request/response shapes, handlers, and middleware.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - One handler per endpoint
//! - [`middleware`] - Basic auth and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
