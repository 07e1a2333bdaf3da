use crate::AppState;
use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The full application: page, assets and system routes.
pub fn init(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config().page.assets_dir);

    Router::new()
        .route("/", get(index))
        .merge(mguide::server::router::system_router())
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let html = state.render().await;
    ([(header::CACHE_CONTROL, "no-store")], Html(html))
}
