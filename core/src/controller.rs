use axum::Router;

/// A group of routes registered on the application router in one call.
pub trait Controller<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn router() -> Router<S>;
}
