//! Startup sequence against an in-memory SQLite database.

mod common;

use common::{all_entries, config, count_entries, insert_entry};
use multitier::bootstrap::{self, SeedOutcome, ensure_schema, seed};
use multitier::error::BootstrapError;
use multitier::SeedMode;

#[tokio::test]
async fn empty_database_gets_the_initial_entry() {
    let (app, outcome) = bootstrap::run(config(&[])).await.unwrap();
    let db = app.database().connection();

    assert!(matches!(outcome, SeedOutcome::Inserted { .. }));
    assert_eq!(count_entries(db).await, 1);

    let entries = all_entries(db).await;
    assert_eq!(entries[0].title, "__init__");
    assert_eq!(entries[0].description, "Initiële data");
    assert!(entries[0].status);
}

#[tokio::test]
async fn existing_entry_is_left_alone() {
    let app = bootstrap::create_app(config(&[])).await.unwrap();
    let db = app.database().connection();

    ensure_schema(db, app.schema()).await.unwrap();
    insert_entry(db, "existing").await;

    let outcome = bootstrap::initialize(&app).await.unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadyPresent);
    assert_eq!(count_entries(db).await, 1);
    assert_eq!(all_entries(db).await[0].title, "existing");
}

#[tokio::test]
async fn restarting_seeds_only_once() {
    let (app, first) = bootstrap::run(config(&[])).await.unwrap();
    let second = bootstrap::initialize(&app).await.unwrap();

    assert!(matches!(first, SeedOutcome::Inserted { .. }));
    assert_eq!(second, SeedOutcome::AlreadyPresent);
    assert_eq!(count_entries(app.database().connection()).await, 1);
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let app = bootstrap::create_app(config(&[])).await.unwrap();
    let db = app.database().connection();

    ensure_schema(db, app.schema()).await.unwrap();
    insert_entry(db, "kept").await;
    ensure_schema(db, app.schema()).await.unwrap();

    assert_eq!(count_entries(db).await, 1);
    assert_eq!(app.schema().table_names().collect::<Vec<_>>(), vec!["entry"]);
}

#[tokio::test]
async fn seeding_can_be_disabled() {
    let (app, outcome) = bootstrap::run(config(&[("SEED_ON_STARTUP", "false")]))
        .await
        .unwrap();

    assert_eq!(outcome, SeedOutcome::Disabled);
    assert_eq!(count_entries(app.database().connection()).await, 0);
}

#[tokio::test]
async fn guarded_mode_seeds_an_empty_table() {
    let (app, outcome) = bootstrap::run(config(&[("SEED_MODE", "guarded")]))
        .await
        .unwrap();

    assert!(matches!(outcome, SeedOutcome::Inserted { .. }));
    assert_eq!(all_entries(app.database().connection()).await[0].title, seed::SEED_TITLE);
}

// Two startups that both pass the emptiness check before either inserts.
// Check-then-insert has no protection against this and ends up with two rows.
#[tokio::test]
async fn interleaved_check_then_insert_duplicates_the_seed() {
    let app = bootstrap::create_app(config(&[])).await.unwrap();
    let db = app.database().connection();
    ensure_schema(db, app.schema()).await.unwrap();

    assert!(seed::is_unseeded(db).await.unwrap());
    assert!(seed::is_unseeded(db).await.unwrap());

    seed::insert_seed(db, SeedMode::CheckThenInsert).await.unwrap();
    seed::insert_seed(db, SeedMode::CheckThenInsert).await.unwrap();

    assert_eq!(count_entries(db).await, 2);
}

#[tokio::test]
async fn interleaved_guarded_insert_keeps_one_seed() {
    let app = bootstrap::create_app(config(&[("SEED_MODE", "guarded")])).await.unwrap();
    let db = app.database().connection();
    ensure_schema(db, app.schema()).await.unwrap();
    assert!(seed::ensure_seed_guard(db).await.unwrap());

    assert!(seed::is_unseeded(db).await.unwrap());
    assert!(seed::is_unseeded(db).await.unwrap());

    let first = seed::insert_seed(db, SeedMode::Guarded).await.unwrap();
    let second = seed::insert_seed(db, SeedMode::Guarded).await.unwrap();

    assert!(matches!(first, SeedOutcome::Inserted { .. }));
    assert_eq!(second, SeedOutcome::AlreadyPresent);
    assert_eq!(count_entries(db).await, 1);
}

#[tokio::test]
async fn unsupported_database_url_fails_to_bind() {
    let result = bootstrap::create_app(config(&[("DATABASE_URL", "nowhere://db")])).await;

    assert!(matches!(result, Err(BootstrapError::Connect(_))));
}

#[tokio::test]
async fn guarded_mode_starts_on_a_table_with_duplicate_seeds() {
    let app = bootstrap::create_app(config(&[("SEED_MODE", "guarded")])).await.unwrap();
    let db = app.database().connection();
    ensure_schema(db, app.schema()).await.unwrap();

    // left behind by two unguarded startups racing each other
    seed::insert_seed(db, SeedMode::CheckThenInsert).await.unwrap();
    seed::insert_seed(db, SeedMode::CheckThenInsert).await.unwrap();

    let outcome = bootstrap::initialize(&app).await.unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadyPresent);
    assert_eq!(count_entries(db).await, 2);
    assert!(!seed::ensure_seed_guard(db).await.unwrap());
}

#[tokio::test]
async fn guarded_mode_only_constrains_the_seed_title() {
    let (app, _) = bootstrap::run(config(&[("SEED_MODE", "guarded")])).await.unwrap();
    let db = app.database().connection();

    insert_entry(db, "groceries").await;
    insert_entry(db, "groceries").await;

    assert_eq!(count_entries(db).await, 3);
    assert_eq!(
        seed::insert_seed(db, SeedMode::Guarded).await.unwrap(),
        SeedOutcome::AlreadyPresent
    );
    assert_eq!(count_entries(db).await, 3);
}
