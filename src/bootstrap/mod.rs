//! Process startup: environment, logging, and the ordered application bootstrap.

mod env;
pub mod schema;
pub mod seed;
mod server;
mod tracing;

use ::tracing::Instrument;
use multitier_core::ConfigBuilder;

use crate::app::{Application, model};
use crate::config::{AppConfig, SeedMode};
use crate::db::{Database, MigrationTracker};
use crate::error::{BootstrapError, BootstrapResult};
use crate::routes;

pub use schema::{SchemaRegistry, ensure_schema};
pub use seed::SeedOutcome;
pub use server::init_server;

pub fn init_base(verbose: bool) {
    let env_file = env::init_env();
    tracing::init_tracing(verbose);

    if let Some(path) = env_file {
        ::tracing::debug!("environment loaded from {}", path.display());
    }
}

/// Read the application configuration from the environment.
pub fn load_config() -> BootstrapResult<AppConfig> {
    Ok(AppConfig::build()?)
}

/// Build the application: bind the database, attach the migration tracker,
/// then register entity schemas and routes, in that order.
pub async fn create_app(config: AppConfig) -> BootstrapResult<Application> {
    let database = Database::connect(&config)
        .await
        .map_err(BootstrapError::Connect)?;
    let migrations = MigrationTracker::new(database.connection().clone());

    let mut app = Application::new(config, database, migrations);

    model::register(&mut app);
    routes::register(&mut app);

    ::tracing::debug!(
        tables = ?app.schema().table_names().collect::<Vec<_>>(),
        "application registered"
    );

    Ok(app)
}

/// Ensure the schema and seed the initial entry, inside the application context.
pub async fn initialize(app: &Application) -> BootstrapResult<SeedOutcome> {
    let config = app.config();
    let span = ::tracing::info_span!("app_context", app = %config.app_name);

    async move {
        let db = app.database().connection();

        ensure_schema(db, app.schema())
            .await
            .map_err(BootstrapError::Schema)?;

        if !config.seed_on_startup {
            ::tracing::debug!("seeding disabled");
            return Ok(SeedOutcome::Disabled);
        }

        if config.seed_mode == SeedMode::Guarded {
            seed::ensure_seed_guard(db)
                .await
                .map_err(BootstrapError::Schema)?;
        }

        seed::seed_initial_entry(db, config.seed_mode)
            .await
            .map_err(BootstrapError::Seed)
    }
    .instrument(span)
    .await
}

/// The whole startup sequence.
pub async fn run(config: AppConfig) -> BootstrapResult<(Application, SeedOutcome)> {
    let app = create_app(config).await?;
    let outcome = initialize(&app).await?;

    Ok((app, outcome))
}
