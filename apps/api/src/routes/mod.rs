pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume-analyzer",
            post(handlers::handle_analyze_resume),
        )
        .route("/api/v1/jd-matcher", post(handlers::handle_match_jd))
        .route(
            "/api/v1/star-generator",
            post(handlers::handle_generate_star),
        )
        .with_state(state)
}
