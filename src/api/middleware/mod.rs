//! HTTP middleware for request processing and protection.
//!
//! Provides basic auth for the mutating routes and request tracing.

pub mod auth;
pub mod tracing;
