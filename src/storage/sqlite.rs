//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use super::{StorageError, UrlRepository};

/// SQLite repository for alias-to-URL mappings.
///
/// The pool is safe for concurrent use; conflicting writes serialize at the
/// engine level.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Wraps an existing pool. The schema must already exist or be created
    /// via [`Self::init_schema`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file at `path` and ensures
    /// the schema exists.
    pub async fn connect(path: &Path) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let repository = Self::new(pool);
        repository.init_schema().await?;

        Ok(repository)
    }

    /// Idempotent schema creation: the mapping table and an index on `alias`.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_urls_alias ON urls (alias)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("INSERT INTO urls (alias, url) VALUES (?1, ?2)")
            .bind(alias)
            .bind(url)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::AliasExists),
            Err(e) => Err(StorageError::Database(e)),
        }
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let url = sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?;

        url.ok_or(StorageError::NotFound)
    }

    async fn update_url(&self, new_url: &str, alias: &str) -> Result<(), StorageError> {
        let current = self.get_url(alias).await?;

        if current == new_url {
            return Err(StorageError::Unchanged);
        }

        sqlx::query("UPDATE urls SET url = ?1 WHERE alias = ?2")
            .bind(new_url)
            .bind(alias)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = ?1")
            .bind(alias)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
