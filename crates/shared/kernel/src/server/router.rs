use super::health;
use axum::Router;
use axum::routing::get;

/// Routes every guide service exposes regardless of what it renders.
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::<S>::new().route("/health", get(health::health_handler))
}
