//! The application object and the state its handlers share.

use std::sync::Arc;

use axum::Router;
use multitier_core::Controller;
use sea_orm::EntityTrait;

use crate::bootstrap::schema::SchemaRegistry;
use crate::config::AppConfig;
use crate::db::{Database, MigrationTracker};

/// Everything a request handler may reach.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: Database,
}

/// The application: configuration, database binding, migration tracker,
/// and whatever routes and entity schemas have been registered on it.
pub struct Application {
    state: AppState,
    migrations: MigrationTracker,
    router: Router<AppState>,
    schema: SchemaRegistry,
}

impl Application {
    pub fn new(config: AppConfig, database: Database, migrations: MigrationTracker) -> Self {
        let schema = SchemaRegistry::new(database.connection().get_database_backend());

        Self {
            state: AppState {
                config: Arc::new(config),
                database,
            },
            migrations,
            router: Router::new(),
            schema,
        }
    }

    pub fn register_controller<C>(&mut self)
    where
        C: Controller<AppState>,
    {
        let router = std::mem::take(&mut self.router);
        self.router = router.merge(C::router());
    }

    pub fn register_entity<E>(&mut self, entity: E)
    where
        E: EntityTrait,
    {
        self.schema.register(entity);
    }

    pub fn config(&self) -> &AppConfig {
        &self.state.config
    }

    pub fn database(&self) -> &Database {
        &self.state.database
    }

    pub fn migrations(&self) -> &MigrationTracker {
        &self.migrations
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// The registered routes bound to this application's state.
    pub fn router(&self) -> Router {
        self.router.clone().with_state(self.state.clone())
    }
}
