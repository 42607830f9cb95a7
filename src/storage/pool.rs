//! # Database Connection Pool Management
//!
//! Provides database connection pool creation for the SQLite-backed catalog.
//! Migrations are embedded in the binary and executed on startup when
//! auto_migrate is enabled.

use crate::config::DatabaseConfig;
use crate::errors::{Error, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Pool, Sqlite,
};
use std::{str::FromStr, time::Duration};

/// Type alias for the database connection pool
pub type DbPool = Pool<Sqlite>;

const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Embedded schema migrations (see the `migrations/` directory)
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create a database connection pool with the specified configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool> {
    validate_config(config)?;

    let connect_options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| Error::Database {
            source: e,
            context: format!("Invalid SQLite connection string: {}", config.url),
        })?
        .create_if_missing(true)
        .busy_timeout(SQLITE_BUSY_TIMEOUT)
        .journal_mode(SqliteJournalMode::Wal);

    let pool_options = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout())
        .test_before_acquire(true);

    let pool_options = if let Some(idle_timeout) = config.idle_timeout() {
        pool_options.idle_timeout(idle_timeout)
    } else {
        pool_options
    };

    let pool = pool_options.connect_with(connect_options).await.map_err(|e| {
        tracing::error!(
            error = %e,
            url = %config.url,
            busy_timeout_ms = SQLITE_BUSY_TIMEOUT.as_millis(),
            "Failed to create SQLite database pool"
        );
        Error::Database {
            source: e,
            context: format!("Failed to connect to database: {}", config.url),
        }
    })?;

    tracing::info!(
        url = %config.url,
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        connect_timeout_ms = config.connect_timeout().as_millis(),
        "Database connection pool created"
    );

    if config.auto_migrate {
        tracing::info!("Auto-migration enabled, running database migrations");
        run_migrations(&pool).await?;
    }

    Ok(pool)
}

/// Run all pending embedded migrations
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        tracing::error!(error = %e, "Database migration failed");
        Error::Database {
            source: sqlx::Error::Migrate(Box::new(e)),
            context: "Database migration failed".to_string(),
        }
    })?;

    tracing::info!("Database migrations up to date");
    Ok(())
}

/// Validate database configuration
fn validate_config(config: &DatabaseConfig) -> Result<()> {
    if config.max_connections == 0 {
        return Err(Error::validation("max_connections must be greater than 0"));
    }

    if config.min_connections > config.max_connections {
        return Err(Error::validation("min_connections cannot be greater than max_connections"));
    }

    if config.url.is_empty() {
        return Err(Error::validation("database URL cannot be empty"));
    }

    if !config.is_sqlite() {
        return Err(Error::validation("database URL must start with 'sqlite://'"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_config_accepts_defaults() {
        assert!(validate_config(&DatabaseConfig::default()).is_ok());
    }

    #[test]
    fn validate_config_rejects_zero_max_connections() {
        let config = DatabaseConfig { max_connections: 0, ..Default::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn validate_config_rejects_min_above_max() {
        let config =
            DatabaseConfig { max_connections: 5, min_connections: 10, ..Default::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn validate_config_rejects_foreign_scheme() {
        let config =
            DatabaseConfig { url: "mysql://localhost/test".to_string(), ..Default::default() };
        assert!(validate_config(&config).is_err());
    }

    #[tokio::test]
    async fn create_pool_in_memory() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            auto_migrate: true,
            ..Default::default()
        };

        let pool = create_pool(&config).await.unwrap();
        crate::storage::check_connection(&pool).await.unwrap();
    }
}
