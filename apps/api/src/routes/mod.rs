pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::icebreaker::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/icebreakers", post(handlers::handle_generate))
        .route("/api/v1/icebreakers/latest", get(handlers::handle_latest))
        .route("/api/v1/icebreakers/copy", post(handlers::handle_copy))
        .route(
            "/api/v1/profile/example",
            get(handlers::handle_example_profile),
        )
        .route("/api/v1/events", post(handlers::handle_client_event))
        .with_state(state)
}
