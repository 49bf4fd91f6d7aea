use axum::{response::IntoResponse, http::StatusCode, Json};

/// JSON response with the status codes handlers in this workspace produce.
pub enum CoreResponse<T, E>
where T: serde::Serialize + utoipa::ToSchema,
      E: serde::Serialize + utoipa::ToSchema
{
    Ok(T),
    NotFound(E),
    ServiceUnavailable(E),
    InternalServerError(E),
}

impl<T, E> CoreResponse<T, E>
where T: serde::Serialize + utoipa::ToSchema,
      E: serde::Serialize + utoipa::ToSchema
{
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T, E> IntoResponse for CoreResponse<T, E>
where T: serde::Serialize + utoipa::ToSchema,
      E: serde::Serialize + utoipa::ToSchema
{
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        match self {
            Self::Ok(data) => (status, Json(data)).into_response(),
            Self::NotFound(error)
            | Self::ServiceUnavailable(error)
            | Self::InternalServerError(error) => (status, Json(error)).into_response(),
        }
    }
}
