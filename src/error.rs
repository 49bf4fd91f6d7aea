use sea_orm::DbErr;

/// Startup failures. Every variant aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("cannot bind database: {0}")]
    Connect(#[source] DbErr),

    #[error("cannot create schema: {0}")]
    Schema(#[source] DbErr),

    #[error("cannot seed initial data: {0}")]
    Seed(#[source] DbErr),

    #[error("migration failed: {0}")]
    Migration(#[source] DbErr),
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;
