//! Initial data for an empty `entry` table.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr, TransactionTrait,
};

use crate::app::model::entry;
use crate::config::SeedMode;

pub const SEED_TITLE: &str = "__init__";
pub const SEED_DESCRIPTION: &str = "Initiële data";

/// Partial unique index backing [`SeedMode::Guarded`]; covers the seed title only.
pub const SEED_GUARD_INDEX: &str = "idx_entry_seed_title_unique";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { id: i32 },
    AlreadyPresent,
    Disabled,
}

/// Seed the initial entry if the table is empty, in one transaction.
///
/// In [`SeedMode::CheckThenInsert`] two processes running this at the same
/// time may both find the table empty and both insert.
pub async fn seed_initial_entry(db: &DatabaseConnection, mode: SeedMode) -> Result<SeedOutcome, DbErr> {
    let txn = db.begin().await?;

    let outcome = if is_unseeded(&txn).await? {
        insert_seed(&txn, mode).await?
    } else {
        SeedOutcome::AlreadyPresent
    };

    txn.commit().await?;

    match outcome {
        SeedOutcome::Inserted { id } => tracing::info!(id, "initial data added"),
        _ => tracing::debug!(?outcome, "initial data not added"),
    }

    Ok(outcome)
}

pub async fn is_unseeded<C>(db: &C) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(entry::Entity::find().one(db).await?.is_none())
}

pub async fn insert_seed<C>(db: &C, mode: SeedMode) -> Result<SeedOutcome, DbErr>
where
    C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
{
    match mode {
        SeedMode::CheckThenInsert => {
            let model = seed_entry().insert(db).await?;
            Ok(SeedOutcome::Inserted { id: model.id })
        }
        SeedMode::Guarded => {
            // savepoint, so a rejected insert leaves the outer transaction usable
            let savepoint = db.begin().await?;

            match seed_entry().insert(&savepoint).await {
                Ok(model) => {
                    savepoint.commit().await?;
                    Ok(SeedOutcome::Inserted { id: model.id })
                }
                // another process got there first
                Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    savepoint.rollback().await?;
                    Ok(SeedOutcome::AlreadyPresent)
                }
                Err(err) => Err(err),
            }
        }
    }
}

/// Create the partial unique index on the seed title that guarded seeding
/// relies on. Other titles stay free to repeat.
///
/// Returns `false` without creating the index when earlier unguarded startups
/// already left more than one seed row behind.
pub async fn ensure_seed_guard(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let seeds = entry::Entity::find()
        .filter(entry::Column::Title.eq(SEED_TITLE))
        .count(db)
        .await?;

    if seeds > 1 {
        tracing::warn!(seeds, "duplicate initial entries found, seed guard not installed");
        return Ok(false);
    }

    db.execute_unprepared(&format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS {SEED_GUARD_INDEX} ON entry (title) WHERE title = '{SEED_TITLE}'"
    ))
    .await?;

    Ok(true)
}

fn seed_entry() -> entry::ActiveModel {
    entry::ActiveModel {
        title: Set(SEED_TITLE.to_owned()),
        description: Set(SEED_DESCRIPTION.to_owned()),
        status: Set(true),
        ..Default::default()
    }
}
