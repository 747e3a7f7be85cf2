//! Application settings loaded from `config.toml` and the environment.
//!
//! Every field has a default, so the file is optional. Environment variables
//! (`DATABASE_URL`, `HOST`, `PORT`, `CORS_ORIGINS`) override whatever the file says.

use super::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{env::VarError, path::Path};
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Store settings
    pub database: DatabaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Origins allowed by CORS; `"*"` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides on top of the file values.
    fn apply_env(&mut self) -> Result<()> {
        if let Some(url) = env_override("DATABASE_URL")? {
            self.database.url = url;
        }
        if let Some(host) = env_override("HOST")? {
            self.server.host = host;
        }
        if let Some(port) = env_override("PORT")? {
            self.server.port = port.parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT '{port}': {e}"),
            })?;
        }
        if let Some(origins) = env_override("CORS_ORIGINS")? {
            self.server.cors_origins = parse_origins(&origins);
        }
        Ok(())
    }
}

/// Reads an optional environment variable.
///
/// # Errors
/// Returns [`Error::EnvVar`] if the variable is set but not valid unicode.
pub fn env_override(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Splits a comma-separated origin list, dropping blanks.
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Builds the effective configuration for the running process.
///
/// Reads the file named by `CONFIG_PATH` (default `config.toml`) when it exists,
/// falls back to defaults otherwise, then applies environment overrides.
///
/// # Errors
/// Returns an error if the file is invalid or an override cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = env_override("CONFIG_PATH")?.unwrap_or_else(|| "config.toml".to_string());
    let mut config = if Path::new(&path).exists() {
        info!("Loading configuration from {}", path);
        load_config(&path)?
    } else {
        debug!("No config file at {}, using defaults", path);
        AppConfig::default()
    };
    config.apply_env()?;
    Ok(config)
}
