use clap::Parser;

use multitier::bootstrap;
use multitier::cli::{Cli, Commands, MigrateAction, ServeArgs};
use multitier::db::{Database, MigrationTracker};
use multitier::error::BootstrapError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    bootstrap::init_base(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => serve(args).await,
        Commands::Migrate(args) => migrate(args.action).await,
        Commands::Docs(args) => multitier::docs::generate_docs(&args.output).await,
    };

    if let Err(err) = result {
        // variant messages already carry their source
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config()?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let (app, _) = bootstrap::run(config).await?;

    bootstrap::init_server(app).await
}

async fn migrate(action: MigrateAction) -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    let database = Database::connect(&config)
        .await
        .map_err(BootstrapError::Connect)?;
    let tracker = MigrationTracker::new(database.connection().clone());

    match action {
        MigrateAction::Up { steps } => {
            tracing::info!("Running pending migrations...");
            tracker.up(steps).await.map_err(BootstrapError::Migration)?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down { steps } => {
            tracing::info!("Rolling back migrations...");
            tracker.down(steps).await.map_err(BootstrapError::Migration)?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            for state in tracker.status().await.map_err(BootstrapError::Migration)? {
                let status = if state.applied { "applied" } else { "pending" };
                println!("{}: {}", state.name, status);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration...");
            tracker.fresh().await.map_err(BootstrapError::Migration)?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}
