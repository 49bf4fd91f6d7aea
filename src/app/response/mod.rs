use crate::app::model::entry;

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct SimpleResponse {
    pub message: String
}

impl SimpleResponse {
    pub fn new(message: impl Into<String>) -> Self {
        SimpleResponse { message: message.into() }
    }
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct EntryResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: bool,
}

impl From<entry::Model> for EntryResponse {
    fn from(model: entry::Model) -> Self {
        EntryResponse {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct EntryList {
    pub entries: Vec<EntryResponse>
}

pub type BasicResponse<T> = multitier_core::response::CoreResponse<T, SimpleResponse>;
