use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::market::prompts::{
    career_path_request, career_path_system, competitors_request, competitors_system,
    insights_request, trends_request, trends_system, MARKET_ANALYST_SYSTEM,
};
use crate::market::{parse_insights, MarketInsights};
use crate::models::{ChatTurn, Language};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MarketInsightsRequest {
    pub job_role: String,
    pub country: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Deserialize)]
pub struct SkillTrendsRequest {
    pub industry: String,
    pub job_role: Option<String>,
    #[serde(default)]
    pub language: Language,
}

/// Resume-based analyses: competitor comparison and career path.
#[derive(Deserialize)]
pub struct ProfileAnalysisRequest {
    #[serde(default)]
    pub resume: String,
    pub industry: String,
    pub job_role: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl ProfileAnalysisRequest {
    fn validated(&self) -> Result<(&str, &str), AppError> {
        let resume = self.resume.trim();
        let industry = self.industry.trim();
        if resume.is_empty() || industry.is_empty() {
            return Err(AppError::Validation(
                "resume and industry are required".to_string(),
            ));
        }
        Ok((resume, industry))
    }
}

#[derive(Serialize)]
pub struct MarketAnalysisResponse {
    pub analysis: String,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

async fn analyze(state: &AppState, system: &str, prompt: String) -> Result<Json<MarketAnalysisResponse>, AppError> {
    let turns = [ChatTurn::system(system), ChatTurn::user(prompt)];
    let analysis = state.llm.generate(&turns).await?;
    Ok(Json(MarketAnalysisResponse { analysis }))
}

#[derive(Serialize)]
pub struct MarketInsightsResponse {
    pub job_role: String,
    pub country: String,
    pub insights: MarketInsights,
}

/// POST /api/v1/market/insights
pub async fn handle_market_insights(
    State(state): State<AppState>,
    Json(req): Json<MarketInsightsRequest>,
) -> Result<Json<MarketInsightsResponse>, AppError> {
    let job_role = req.job_role.trim();
    let country = req.country.trim();
    if job_role.is_empty() || country.is_empty() {
        return Err(AppError::Validation(
            "job_role and country are required".to_string(),
        ));
    }

    let turns = [
        ChatTurn::system(MARKET_ANALYST_SYSTEM),
        ChatTurn::user(insights_request(job_role, country, req.language)),
    ];
    let reply = state.llm.generate(&turns).await?;

    Ok(Json(MarketInsightsResponse {
        job_role: job_role.to_string(),
        country: country.to_string(),
        insights: parse_insights(&reply),
    }))
}

/// POST /api/v1/market/trends
pub async fn handle_skill_trends(
    State(state): State<AppState>,
    Json(req): Json<SkillTrendsRequest>,
) -> Result<Json<MarketAnalysisResponse>, AppError> {
    let industry = req.industry.trim();
    if industry.is_empty() {
        return Err(AppError::Validation("industry is required".to_string()));
    }
    let prompt = trends_request(industry, non_blank(&req.job_role), req.language);
    analyze(&state, trends_system(req.language), prompt).await
}

/// POST /api/v1/market/competitors
pub async fn handle_competitor_comparison(
    State(state): State<AppState>,
    Json(req): Json<ProfileAnalysisRequest>,
) -> Result<Json<MarketAnalysisResponse>, AppError> {
    let (resume, industry) = req.validated()?;
    let prompt = competitors_request(resume, industry, non_blank(&req.job_role), req.language);
    analyze(&state, competitors_system(req.language), prompt).await
}

/// POST /api/v1/market/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    Json(req): Json<ProfileAnalysisRequest>,
) -> Result<Json<MarketAnalysisResponse>, AppError> {
    let (resume, industry) = req.validated()?;
    let prompt = career_path_request(resume, industry, non_blank(&req.job_role), req.language);
    analyze(&state, career_path_system(req.language), prompt).await
}
