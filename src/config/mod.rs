/// Database connection lifecycle and table creation
pub mod database;

/// Server and store settings from config.toml and the environment
pub mod settings;

pub use settings::{AppConfig, DatabaseConfig, ServerConfig, load_app_configuration};
