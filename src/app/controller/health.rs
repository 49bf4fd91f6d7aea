use axum::{Router, extract::State, routing::get};
use multitier_core::{Controller, CoreResponse};

use crate::app::AppState;
use crate::app::response::{BasicResponse, SimpleResponse};

pub struct HealthController;

impl Controller<AppState> for HealthController {
    fn router() -> Router<AppState> {
        Router::new().route("/health", get(health))
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = SimpleResponse),
        (status = 503, description = "Database unreachable", body = SimpleResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> BasicResponse<SimpleResponse> {
    match state.database.ping().await {
        Ok(()) => CoreResponse::Ok(SimpleResponse::new("ok")),
        Err(err) => {
            tracing::warn!("database ping failed: {:?}", err);
            CoreResponse::ServiceUnavailable(SimpleResponse::new("database unavailable"))
        }
    }
}
