//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup into an immutable [`Config`] which is shared with
//! every component through [`AppState`](crate::server::model::app::AppState). Every value has
//! a development default so the server starts without any environment, but those defaults
//! (the signing secret and database credentials in particular) are not safe for production.

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::server::error::config::ConfigError;

/// Signing secret used when `SECRET_KEY` is not set.
pub static DEFAULT_SECRET_KEY: &str = "your-secret-key-change-in-production-12345";

static DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://127.0.0.1:3000",
];

/// Database connection parameters.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// Full connection URL, takes precedence over the individual parameters when set
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing the request
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Connection URL for the configured database.
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "openhealth".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

/// Immutable application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub app_name: String,
    pub api_version: String,
    pub host: String,
    pub port: u16,
    /// Symmetric secret used to sign access tokens
    pub secret_key: String,
    /// HMAC algorithm used to sign access tokens
    pub jwt_algorithm: Algorithm,
    /// Lifetime of issued access tokens
    pub access_token_expire_minutes: i64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    pub database: DatabaseConfig,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "OpenHealth Admin API".to_string(),
            api_version: "v1".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            jwt_algorithm: Algorithm::HS256,
            access_token_expire_minutes: 30,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            database: DatabaseConfig::default(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable either unset (default applied) or valid
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to a value that cannot be used
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let db_defaults = defaults.database;

        let jwt_algorithm = match lookup("JWT_ALGORITHM") {
            Some(value) => parse_hmac_algorithm(&value)?,
            None => defaults.jwt_algorithm,
        };

        let access_token_expire_minutes = parse_or(
            &lookup,
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            defaults.access_token_expire_minutes,
        )?;
        if access_token_expire_minutes <= 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
                reason: "must be a positive number of minutes".to_string(),
            });
        }

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidEnvValue {
                var: "BCRYPT_COST".to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.allowed_origins,
        };

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: lookup("POSTGRES_HOST").unwrap_or(db_defaults.host),
            port: parse_or(&lookup, "POSTGRES_PORT", db_defaults.port)?,
            user: lookup("POSTGRES_USER").unwrap_or(db_defaults.user),
            password: lookup("POSTGRES_PASSWORD").unwrap_or(db_defaults.password),
            name: lookup("POSTGRES_DB").unwrap_or(db_defaults.name),
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                db_defaults.max_connections,
            )?,
            acquire_timeout_secs: parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                db_defaults.acquire_timeout_secs,
            )?,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            api_version: lookup("API_VERSION").unwrap_or(defaults.api_version),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            secret_key: lookup("SECRET_KEY")
                .filter(|secret| !secret.is_empty())
                .unwrap_or(defaults.secret_key),
            jwt_algorithm,
            access_token_expire_minutes,
            bcrypt_cost,
            database,
            allowed_origins,
        })
    }

    /// Whether tokens are being signed with the publicly known development secret.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

/// Only symmetric algorithms can be used with a shared secret.
fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(value.trim()) {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(algorithm),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "JWT_ALGORITHM".to_string(),
            reason: format!("{} is not one of HS256, HS384, HS512", value),
        }),
    }
}
