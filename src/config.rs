// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    database_max_connections: u32,
    slug_insert_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_SLUG_INSERT_ATTEMPTS: u32 = 5;
const DEFAULT_MAX_CONNECTIONS: u32 = 16;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_openapi_snapshot_path() -> PathBuf {
    PathBuf::from("openapi.json")
}

fn parse_positive(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    parse_positive_value(key, env::var(key).ok().as_deref(), default)
}

/// `default` when unset, otherwise a strictly positive integer.
fn parse_positive_value(
    key: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("DATABASE_URL cannot be empty".into()));
        }

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        let database_max_connections =
            parse_positive("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let slug_insert_attempts =
            parse_positive("SLUG_INSERT_ATTEMPTS", DEFAULT_SLUG_INSERT_ATTEMPTS)?;

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            database_max_connections,
            slug_insert_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// How many inserts a generated slug gets before a collision is reported.
    pub fn slug_insert_attempts(&self) -> u32 {
        self.slug_insert_attempts
    }

    /// Snapshot location for `write_openapi_snapshot`. Read on its own so the
    /// binary runs without `DATABASE_URL`.
    pub fn openapi_snapshot_path_from_env() -> PathBuf {
        env::var("OPENAPI_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_openapi_snapshot_path())
    }
}
