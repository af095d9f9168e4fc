use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::expert_system;
use crate::models::{ChatTurn, Language};
use crate::skills_gap::extractor::{compare, SkillsComparison};
use crate::skills_gap::prompts::{analyst_role, gap_analysis_request};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SkillsGapRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct SkillsGapResponse {
    #[serde(flatten)]
    pub comparison: SkillsComparison,
    pub ai_analysis: String,
}

/// POST /api/v1/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillsGapRequest>,
) -> Result<Json<SkillsGapResponse>, AppError> {
    if req.resume.trim().is_empty() || req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Both resume and job_description are required".to_string(),
        ));
    }

    let comparison = compare(&req.resume, &req.job_description);
    debug!(
        matching = comparison.matching_skills.len(),
        missing = comparison.missing_skills.len(),
        match_percentage = comparison.match_percentage,
        "Keyword skills compared"
    );

    let turns = [
        ChatTurn::system(expert_system(analyst_role(req.language), req.language)),
        ChatTurn::user(gap_analysis_request(&req.resume, &req.job_description, req.language)),
    ];
    let ai_analysis = state.llm.generate(&turns).await?;

    Ok(Json(SkillsGapResponse {
        comparison,
        ai_analysis,
    }))
}
