use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::infra::storage::migrations::Migrator;

/// Store connection settings (the `database` section of the app config).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `sqlite://contacts.db?mode=rwc`.
    pub dsn: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    #[must_use]
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }

    /// In-memory SQLite, one connection so every query sees the same database.
    #[must_use]
    pub fn sqlite_memory() -> Self {
        Self {
            max_connections: 1,
            ..Self::new("sqlite::memory:")
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    8
}

/// Open the pool and bring the schema up to date.
///
/// # Errors
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(cfg.max_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);
    if cfg.dsn.contains(":memory:") {
        // An in-memory SQLite database lives only as long as its connection.
        opts.min_connections(1);
    }

    let db = Database::connect(opts).await?;
    info!("Running contacts database migrations");
    Migrator::up(&db, None).await?;
    info!("Contacts database migrations completed successfully");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let cfg: DatabaseConfig =
            serde_json::from_value(serde_json::json!({ "dsn": "sqlite::memory:" })).unwrap();
        assert_eq!(cfg, DatabaseConfig::new("sqlite::memory:"));
        assert_eq!(cfg.max_connections, 10);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<DatabaseConfig, _> =
            serde_json::from_value(serde_json::json!({ "dsn": "x", "pool": 3 }));
        assert!(res.is_err());
    }
}
