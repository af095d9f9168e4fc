use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::documents::extract::ExtractedDocument;
use crate::documents::prompts::{analysis_prompt, AnalysisType};
use crate::documents::{extract_upload, read_upload};
use crate::errors::AppError;
use crate::llm_client::prompts::assistant_system;
use crate::models::{ChatTurn, Language};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    pub analysis_type: AnalysisType,
    #[serde(default)]
    pub language: Language,
    pub custom_prompt: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /api/v1/documents/extract
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractedDocument>, AppError> {
    let (file_name, data) = read_upload(multipart).await?;
    let document = extract_upload(file_name, data).await?;
    Ok(Json(document))
}

/// POST /api/v1/documents/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let prompt = analysis_prompt(
        req.analysis_type,
        &req.content,
        req.custom_prompt.as_deref(),
        req.language,
    )?;
    let turns = [
        ChatTurn::system(assistant_system(req.language)),
        ChatTurn::user(prompt),
    ];
    let analysis = state.llm.generate(&turns).await?;
    Ok(Json(AnalyzeResponse { analysis }))
}
