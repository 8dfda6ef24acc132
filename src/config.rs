//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="prod"
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="0.0.0.0:8082"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); picks log defaults
//! - `STORAGE_PATH` - SQLite file path or `sqlite:` URL (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `localhost:8082`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth for write routes; both or neither
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: `debug` for local/dev, `info` for prod)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` for local, `json` otherwise)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::api::middleware::auth::BasicCredentials;
use crate::infrastructure::persistence::DEFAULT_MAX_CONNECTIONS;
use crate::routes::RouterOptions;
use crate::state::AliasPolicy;
use crate::utils::alias::{DEFAULT_ALIAS_LENGTH, MAX_ALIAS_LENGTH};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    /// Default `RUST_LOG` directive for this environment.
    pub fn default_log_level(self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    /// Default `LOG_FORMAT` for this environment.
    pub fn default_log_format(self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout_seconds: u64,
    pub http_user: Option<String>,
    pub http_password: Option<String>,
    pub alias_length: usize,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` is unknown or a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => AppEnv::Local,
        };

        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage/storage.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8082".to_string());

        let http_timeout_seconds = parse_var("HTTP_TIMEOUT")?.unwrap_or(4);

        let http_user = env::var("HTTP_USER").ok().filter(|v| !v.is_empty());
        let http_password = env::var("HTTP_PASSWORD").ok().filter(|v| !v.is_empty());

        let alias_length = parse_var("ALIAS_LENGTH")?.unwrap_or(DEFAULT_ALIAS_LENGTH);
        let db_max_connections =
            parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| env.default_log_format().to_string());

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            http_timeout_seconds,
            http_user,
            http_password,
            alias_length,
            db_max_connections,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - only one of `http_user` / `http_password` is set
    /// - `alias_length`, `http_timeout_seconds` or `db_max_connections` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.http_user.is_some() != self.http_password.is_some() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must be set together");
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Basic-auth credentials for write routes, when configured.
    pub fn credentials(&self) -> Option<BasicCredentials> {
        match (&self.http_user, &self.http_password) {
            (Some(user), Some(password)) => {
                Some(BasicCredentials::new(user.as_str(), password.as_str()))
            }
            _ => None,
        }
    }

    /// Router settings derived from this configuration.
    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            credentials: self.credentials(),
            request_timeout: Duration::from_secs(self.http_timeout_seconds),
            alias_policy: AliasPolicy {
                length: self.alias_length,
                ..AliasPolicy::default()
            },
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.http_timeout_seconds);

        match &self.http_user {
            Some(user) => tracing::info!("  Basic auth: {}:***", user),
            None => tracing::info!("  Basic auth: disabled"),
        }

        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional environment variable, failing on malformed values.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
