pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/v1/resumes/generate", post(handlers::handle_generate))
        .route("/api/v1/suggestions", post(handlers::handle_suggestion))
        .route("/api/v1/ats/score", post(handlers::handle_ats_score))
        .route(
            "/api/v1/profile/strength",
            post(handlers::handle_profile_strength),
        )
        // Rendering
        .route("/api/v1/resumes/preview", post(handlers::handle_preview))
        .route("/api/v1/resumes/pdf", post(handlers::handle_render_pdf))
        .with_state(state)
}
