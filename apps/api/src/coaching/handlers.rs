use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::coaching::prompts::{
    courses_request, courses_system, keywords_request, keywords_system, questions_request,
    tips_request,
};
use crate::errors::AppError;
use crate::llm_client::prompts::assistant_system;
use crate::models::{ChatTurn, InterviewType, Language};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InterviewTopicRequest {
    pub interview_type: InterviewType,
    pub job_role: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl InterviewTopicRequest {
    fn job_role(&self) -> Option<&str> {
        self.job_role.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }
}

#[derive(Deserialize)]
pub struct CoursesRequest {
    pub weaknesses: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct CoachingResponse {
    pub response: String,
}

async fn ask(state: &AppState, system: String, prompt: String) -> Result<Json<CoachingResponse>, AppError> {
    let turns = [ChatTurn::system(system), ChatTurn::user(prompt)];
    let response = state.llm.generate(&turns).await?;
    Ok(Json(CoachingResponse { response }))
}

/// POST /api/v1/coaching/tips
pub async fn handle_tips(
    State(state): State<AppState>,
    Json(req): Json<InterviewTopicRequest>,
) -> Result<Json<CoachingResponse>, AppError> {
    let prompt = tips_request(req.interview_type, req.job_role(), req.language);
    ask(&state, assistant_system(req.language), prompt).await
}

/// POST /api/v1/coaching/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewTopicRequest>,
) -> Result<Json<CoachingResponse>, AppError> {
    let prompt = questions_request(req.interview_type, req.job_role(), req.language);
    ask(&state, assistant_system(req.language), prompt).await
}

/// POST /api/v1/coaching/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(req): Json<InterviewTopicRequest>,
) -> Result<Json<CoachingResponse>, AppError> {
    let prompt = keywords_request(req.interview_type, req.job_role(), req.language);
    ask(&state, keywords_system(req.language).to_string(), prompt).await
}

/// POST /api/v1/coaching/courses
pub async fn handle_courses(
    State(state): State<AppState>,
    Json(req): Json<CoursesRequest>,
) -> Result<Json<CoachingResponse>, AppError> {
    let weaknesses = req.weaknesses.trim();
    if weaknesses.is_empty() {
        return Err(AppError::Validation("weaknesses cannot be empty".to_string()));
    }
    let prompt = courses_request(weaknesses, req.language);
    ask(&state, courses_system(req.language).to_string(), prompt).await
}
