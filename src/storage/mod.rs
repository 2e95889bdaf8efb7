//! Storage layer: repository trait and error kinds.
//!
//! The [`UrlRepository`] trait is the portability boundary for the service:
//! handlers only see the error kinds below, so an alternate relational
//! backend must map its failures onto the same variants.

use async_trait::async_trait;
use thiserror::Error;

pub mod sqlite;

pub use sqlite::SqliteUrlRepository;

/// Failure kinds surfaced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already taken by a live row.
    #[error("alias already exists")]
    AliasExists,

    /// No row matches the alias.
    #[error("url not found")]
    NotFound,

    /// Update would write the URL already stored for the alias.
    #[error("url is unchanged")]
    Unchanged,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for alias-to-URL mappings.
///
/// Each operation wraps a single statement; there are no transactions
/// spanning operations and no retries.
///
/// # Implementations
///
/// - [`SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] when the alias is taken,
    /// [`StorageError::Database`] on other database errors.
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError>;

    /// Looks up the URL stored for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no row matches.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Replaces the URL stored for an alias. The alias itself is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when the alias does not exist and
    /// [`StorageError::Unchanged`] when the stored URL already equals
    /// `new_url`.
    async fn update_url(&self, new_url: &str, alias: &str) -> Result<(), StorageError>;

    /// Removes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no row was deleted.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}
