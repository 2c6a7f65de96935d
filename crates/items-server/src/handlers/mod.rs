//! HTTP handlers

pub mod items;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{cors, handle_panic};
use crate::AppState;

/// The full application: routes, wildcard 404, and the edge layers. Explicit
/// routes are matched first; anything else falls through to `not_found`.
pub fn app(state: AppState) -> Router {
    edge_layers(
        Router::new()
            .route("/items", get(items::list).post(items::create))
            .route("/items/:id", get(items::get))
            .fallback(not_found)
            .with_state(state),
    )
}

/// Layer order matters: the panic boundary sits innermost so the CORS layer
/// still decorates its 500s.
fn edge_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(cors))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
