use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

/// One known migration and whether the database has applied it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Versioned schema upgrades bound to the application's connection.
///
/// Attached during bootstrap, driven only by the `migrate` command.
#[derive(Clone, Debug)]
pub struct MigrationTracker {
    connection: DatabaseConnection,
}

impl MigrationTracker {
    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Apply pending migrations, all of them when `steps` is `None`.
    pub async fn up(&self, steps: Option<u32>) -> Result<(), DbErr> {
        Migrator::up(&self.connection, steps).await
    }

    /// Roll back `steps` migrations, the last one when `None`.
    pub async fn down(&self, steps: Option<u32>) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(steps.unwrap_or(1))).await
    }

    /// Drop every table and re-apply all migrations.
    pub async fn fresh(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Every migration the binary knows about, in order, with its applied state.
    pub async fn status(&self) -> Result<Vec<MigrationState>, DbErr> {
        let applied: Vec<String> = Migrator::get_applied_migrations(&self.connection)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let applied = applied.contains(&name);
                MigrationState { name, applied }
            })
            .collect())
    }
}
