use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use multitier_core::{Controller, CoreResponse};
use sea_orm::{EntityTrait, QueryOrder};

use crate::app::AppState;
use crate::app::model::entry;
use crate::app::response::{BasicResponse, EntryList, EntryResponse, SimpleResponse};

pub struct EntryController;

impl Controller<AppState> for EntryController {
    fn router() -> Router<AppState> {
        Router::new()
            .route("/entries", get(list_entries))
            .route("/entries/{id}", get(show_entry))
    }
}

#[utoipa::path(
    get,
    path = "/entries",
    tag = "entries",
    responses(
        (status = 200, description = "All entries ordered by id", body = EntryList),
        (status = 500, description = "Internal server error", body = SimpleResponse)
    )
)]
pub async fn list_entries(State(state): State<AppState>) -> BasicResponse<EntryList> {
    let entries = entry::Entity::find()
        .order_by_asc(entry::Column::Id)
        .all(state.database.connection())
        .await;

    match entries {
        Ok(entries) => CoreResponse::Ok(EntryList {
            entries: entries.into_iter().map(EntryResponse::from).collect(),
        }),
        Err(err) => {
            tracing::error!("cannot list entries: {:?}", err);
            CoreResponse::InternalServerError(SimpleResponse::new("internal server error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/entries/{id}",
    tag = "entries",
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry", body = EntryResponse),
        (status = 404, description = "No entry with this id", body = SimpleResponse),
        (status = 500, description = "Internal server error", body = SimpleResponse)
    )
)]
pub async fn show_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> BasicResponse<EntryResponse> {
    match entry::Entity::find_by_id(id).one(state.database.connection()).await {
        Ok(Some(model)) => CoreResponse::Ok(model.into()),
        Ok(None) => CoreResponse::NotFound(SimpleResponse::new("entry not found")),
        Err(err) => {
            tracing::error!(id, "cannot load entry: {:?}", err);
            CoreResponse::InternalServerError(SimpleResponse::new("internal server error"))
        }
    }
}
