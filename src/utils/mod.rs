//! Helper functions used across the application.
//!
//! - [`alias`] - Random alias generation

pub mod alias;
