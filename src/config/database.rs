//! Database configuration module.
//!
//! This module owns the store connection lifecycle: opening a `SeaORM` connection
//! from a URL, creating one table per collection from the entity definitions, and
//! closing the connection on shutdown. Tables are generated with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! models without hand-written SQL.

use crate::entities::{Application, BenefitPlan, BusinessOwner, Employee, FicaCalculation};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info};

/// Default store location when neither the config file nor `DATABASE_URL` set one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/benefits.sqlite?mode=rwc";

/// File path of a file-backed `SQLite` URL; `None` for in-memory or other backends.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(Path::new(path))
}

/// Establishes a connection to the store at `database_url`.
///
/// For a file-backed `SQLite` store the parent directory is created first.
///
/// # Errors
/// Returns an error if the directory cannot be created or the connection fails.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let parent = sqlite_file_path(database_url)
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = parent {
        std::fs::create_dir_all(dir)?;
    }
    debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all collection tables if they do not exist yet.
///
/// Owners are created first because the other tables reference them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, BusinessOwner).await?;
    create_table(db, Employee).await?;
    create_table(db, BenefitPlan).await?;
    create_table(db, FicaCalculation).await?;
    create_table(db, Application).await?;
    info!("Database tables ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Closes the connection pool. Called once the HTTP server has drained.
pub async fn close_connection(db: DatabaseConnection) -> Result<()> {
    db.close().await?;
    info!("Database connection closed");
    Ok(())
}
