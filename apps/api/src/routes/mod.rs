pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::coaching::handlers as coaching;
use crate::documents::handlers as documents;
use crate::interview::handlers as interview;
use crate::market::handlers as market;
use crate::progress::handlers as progress;
use crate::sessions::handlers as sessions;
use crate::skills_gap::handlers as skills_gap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Stateless features
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/documents/extract", post(documents::handle_extract))
        .route("/api/v1/documents/analyze", post(documents::handle_analyze))
        .route("/api/v1/skills-gap", post(skills_gap::handle_skills_gap))
        .route("/api/v1/coaching/tips", post(coaching::handle_tips))
        .route("/api/v1/coaching/questions", post(coaching::handle_questions))
        .route("/api/v1/coaching/keywords", post(coaching::handle_keywords))
        .route("/api/v1/coaching/courses", post(coaching::handle_courses))
        .route("/api/v1/market/insights", post(market::handle_market_insights))
        .route("/api/v1/market/trends", post(market::handle_skill_trends))
        .route(
            "/api/v1/market/competitors",
            post(market::handle_competitor_comparison),
        )
        .route("/api/v1/market/career-path", post(market::handle_career_path))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", delete(sessions::handle_delete_session))
        .route("/api/v1/sessions/:id/clear", post(sessions::handle_clear_session))
        .route("/api/v1/sessions/:id/chat", post(chat::handle_session_chat))
        .route(
            "/api/v1/sessions/:id/document",
            post(chat::handle_session_document),
        )
        // Interview simulator
        .route(
            "/api/v1/sessions/:id/interview",
            post(interview::handle_start_interview).get(interview::handle_get_interview),
        )
        .route(
            "/api/v1/sessions/:id/interview/answer",
            post(interview::handle_answer),
        )
        .route(
            "/api/v1/sessions/:id/interview/finish",
            post(interview::handle_finish),
        )
        // Progress tracking
        .route(
            "/api/v1/sessions/:id/progress",
            get(progress::handle_get_progress),
        )
        .route(
            "/api/v1/sessions/:id/progress/scores",
            post(progress::handle_record_scores),
        )
        .route(
            "/api/v1/sessions/:id/progress/suggestions",
            post(progress::handle_suggestions),
        )
        .layer(body_limit)
        .with_state(state)
}
