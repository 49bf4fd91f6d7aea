use std::path::Path;

use tokio::io::AsyncWriteExt;
use utoipa::OpenApi;

use crate::app::controller::{entry, health};
use crate::app::response::{EntryList, EntryResponse, SimpleResponse};

#[derive(OpenApi)]
#[openapi(
    paths(health::health, entry::list_entries, entry::show_entry),
    components(schemas(SimpleResponse, EntryResponse, EntryList)),
    tags(
        (name = "entries", description = "Entries, including the seeded one"),
        (name = "health", description = "Liveness of the database binding")
    ),
    info(description = "API Docs")
)]
pub struct MainApiDoc;

pub async fn generate_docs(path: &Path) -> anyhow::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await?;

    let docs = MainApiDoc::openapi().to_pretty_json()?;

    file.write_all(docs.as_bytes()).await?;

    tracing::info!("API docs written to {}", path.display());

    Ok(())
}
