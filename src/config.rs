//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honored when present (see `main.rs`).
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - Path to the SQLite database file (created if missing)
//! - `ADMIN_USER` - Basic auth user for the `/modify` routes
//! - `ADMIN_PASSWORD` - Basic auth password for the `/modify` routes
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `APP_ENV` - Runtime environment: `local` or `prod` (default: `local`)
//! - `HTTP_TIMEOUT_SECS` - Per-request timeout in seconds (default: 4)
//! - `RUST_LOG` - Log filter; defaults to `debug` in `local` and `info` in `prod`

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Runtime environment, controls log output format and default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Prod,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("APP_ENV must be 'local' or 'prod', got '{}'", other),
        }
    }

    /// Default log level when `RUST_LOG` is not set.
    fn default_log_level(self) -> &'static str {
        match self {
            Self::Local => "debug",
            Self::Prod => "info",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Prod => f.write_str("prod"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub admin_user: String,
    pub admin_password: String,
    /// Per-request timeout applied by the router middleware.
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or malformed.
    pub fn from_env() -> Result<Self> {
        let env = AppEnv::parse(&env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()))?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let admin_user = env::var("ADMIN_USER").context("ADMIN_USER must be set")?;
        let admin_password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            admin_user,
            admin_password,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` is not in `host:port` form
    /// - `admin_user` or `admin_password` is empty
    /// - `request_timeout` is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.admin_user.is_empty() {
            anyhow::bail!("ADMIN_USER must not be empty");
        }

        if self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            env: AppEnv::Local,
            storage_path: "./urlhop.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            admin_user: "admin".to_string(),
            admin_password: "secret".to_string(),
            request_timeout: Duration::from_secs(4),
            log_level: "debug".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Empty storage path
        config.storage_path = String::new();
        assert!(config.validate().is_err());
        config.storage_path = "./urlhop.db".to_string();

        // Listen address without port
        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:8080".to_string();

        // Empty credentials
        config.admin_password = String::new();
        assert!(config.validate().is_err());
        config.admin_password = "secret".to_string();

        // Zero timeout
        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_app_env_parse() {
        assert_eq!(AppEnv::parse("local").unwrap(), AppEnv::Local);
        assert_eq!(AppEnv::parse("prod").unwrap(), AppEnv::Prod);
        assert!(AppEnv::parse("staging").is_err());
    }

    #[test]
    fn test_default_log_level_per_env() {
        assert_eq!(AppEnv::Local.default_log_level(), "debug");
        assert_eq!(AppEnv::Prod.default_log_level(), "info");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/test-urlhop.db");
            env::set_var("ADMIN_USER", "admin");
            env::set_var("ADMIN_PASSWORD", "secret");
            env::remove_var("APP_ENV");
            env::remove_var("LISTEN");
            env::remove_var("HTTP_TIMEOUT_SECS");
            env::remove_var("RUST_LOG");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.env, AppEnv::Local);
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(4));
        assert_eq!(config.log_level, "debug");

        // Cleanup
        unsafe {
            env::remove_var("STORAGE_PATH");
            env::remove_var("ADMIN_USER");
            env::remove_var("ADMIN_PASSWORD");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_storage_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("STORAGE_PATH");
            env::set_var("ADMIN_USER", "admin");
            env::set_var("ADMIN_PASSWORD", "secret");
        }

        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("ADMIN_USER");
            env::remove_var("ADMIN_PASSWORD");
        }
    }
}
