//! Database binding and migration tracking.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};

use crate::config::AppConfig;

mod migrations;

pub use migrations::{MigrationState, MigrationTracker};

/// Connection-pool backed gateway to the configured relational store.
#[derive(Clone, Debug)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Bind the pool without opening a connection.
    ///
    /// Only the URL and pool options are validated here, the first query
    /// establishes the actual connection.
    pub async fn connect(config: &AppConfig) -> Result<Self, DbErr> {
        let options = connect_options(config);
        let connection = SeaDatabase::connect(options).await?;
        tracing::debug!("database pool bound");

        Ok(Self { connection })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}

fn connect_options(config: &AppConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .connect_lazy(true)
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // every connection to `sqlite::memory:` is its own database, so the
    // single connection must never be reaped or recycled
    if is_sqlite(&config.database_url) {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    } else {
        options.max_connections(config.max_connections);
    }

    options
}

fn is_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AppConfig {
        use multitier_core::ConfigBuilder;

        let url = url.to_string();
        AppConfig::build_from(|key| (key == "DATABASE_URL").then(|| url.clone())).unwrap()
    }

    #[test]
    fn sqlite_keeps_its_only_connection_open() {
        let options = connect_options(&config("sqlite::memory:"));

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_idle_timeout(), Some(None));
        assert_eq!(options.get_max_lifetime(), Some(None));
        assert!(options.get_connect_lazy());
    }

    #[test]
    fn server_databases_use_the_configured_pool_size() {
        let options = connect_options(&config("postgres://localhost/app"));

        assert_eq!(options.get_max_connections(), Some(10));
        assert_eq!(options.get_min_connections(), None);
        assert_eq!(options.get_idle_timeout(), None);
    }

    #[test]
    fn sqlite_urls() {
        assert!(is_sqlite("sqlite::memory:"));
        assert!(is_sqlite("sqlite://data/app.db?mode=rwc"));
        assert!(!is_sqlite("postgres://localhost/app"));
    }
}
