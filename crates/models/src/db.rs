//! Connection pool lifecycle.
//!
//! The pool is built from an explicit [`DatabaseConfig`], migrated once by
//! [`init`] and closed by [`shutdown`]. Nothing here is global.
use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(cfg: &configs::DatabaseConfig) -> Self {
        Self {
            url: cfg.url.clone(),
            max_connections: cfg.max_connections,
            min_connections: cfg.min_connections,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.idle_timeout_secs),
            max_lifetime: Duration::from_secs(cfg.max_lifetime_secs),
            sqlx_logging: cfg.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// A private SQLite database living in a single connection.
    ///
    /// The database lives only as long as a connection to it is open, so the
    /// pool is pinned to one connection that never idles out or expires.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(24 * 60 * 60),
            max_lifetime: Duration::from_secs(24 * 60 * 60),
            sqlx_logging: false,
        }
    }
}

pub async fn connect_with_config(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .sqlx_logging(config.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn init(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(config).await?;
    migration::Migrator::up(&db, None).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "database ready"
    );
    Ok(db)
}

pub async fn shutdown(db: DatabaseConnection) -> anyhow::Result<()> {
    db.close().await?;
    info!("database pool closed");
    Ok(())
}

pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    db.query_one(stmt).await?;
    Ok(())
}
