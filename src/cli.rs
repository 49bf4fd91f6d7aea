//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "multitier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the application and serve HTTP (default)
    Serve(ServeArgs),

    /// Manage versioned schema migrations
    Migrate(MigrateArgs),

    /// Write the OpenAPI document
    Docs(DocsArgs),
}

#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to, overrides SERVER_HOST
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on, overrides SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up {
        /// Number of migrations to apply, all when omitted
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        /// Number of migrations to roll back
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Show which migrations are applied
    Status,
    /// Drop all tables and re-apply every migration
    Fresh,
}

#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// Output file
    #[arg(short, long, default_value = "api.json")]
    pub output: PathBuf,
}
