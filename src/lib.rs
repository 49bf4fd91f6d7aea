//! Multi-tier entry service.
//!
//! Startup builds an [`app::Application`] explicitly: configuration, database
//! binding, migration tracker, then entity and route registration. It then
//! creates any missing tables and seeds one `__init__` entry into an empty
//! table before the HTTP server starts.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod routes;

pub use app::{AppState, Application};
pub use config::{AppConfig, SeedMode};
pub use error::{BootstrapError, BootstrapResult};
