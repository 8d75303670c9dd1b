//! Router assembly

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};
use crate::middleware::request_id_middleware;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/chat-completion",
            post(handlers::chat_completion::handler),
        )
        .route("/health", get(handlers::health::handler))
        .route("/metrics", get(handlers::metrics::handler))
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
