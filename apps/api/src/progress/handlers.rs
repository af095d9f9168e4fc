use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ChatTurn, Language};
use crate::progress::prompts::{suggestions_request, PROGRESS_COACH_SYSTEM};
use crate::progress::scores::{extract_scores, InterviewScores};
use crate::progress::tracker::{ChartPoint, InterviewRecord, SkillProgress};
use crate::state::AppState;

/// Interviews needed before progress can be compared.
pub const MIN_INTERVIEWS_FOR_SUGGESTIONS: usize = 2;

#[derive(Serialize)]
pub struct ProgressReport {
    pub interview_count: usize,
    pub history: Vec<InterviewRecord>,
    pub summary: Vec<SkillProgress>,
    pub chart: Vec<ChartPoint>,
}

#[derive(Deserialize)]
pub struct RecordScoresRequest {
    pub feedback: String,
    pub job_role: Option<String>,
    pub interview_type: Option<String>,
    /// Defaults to the session language.
    pub language: Option<Language>,
}

#[derive(Serialize)]
pub struct RecordScoresResponse {
    pub record: InterviewRecord,
    pub interview_count: usize,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: String,
}

/// GET /api/v1/sessions/:id/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressReport>, AppError> {
    let session = state.sessions.get(id).await?;
    let tracker = &session.progress;
    Ok(Json(ProgressReport {
        interview_count: tracker.history().len(),
        history: tracker.history().to_vec(),
        summary: tracker.summary(session.language),
        chart: tracker.chart(),
    }))
}

/// POST /api/v1/sessions/:id/progress/scores
pub async fn handle_record_scores(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordScoresRequest>,
) -> Result<Json<RecordScoresResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |s| {
            let language = req.language.unwrap_or(s.language);
            let scores: InterviewScores = extract_scores(&req.feedback, language);
            if scores.is_empty() {
                return Err(AppError::UnprocessableEntity(
                    "No scores could be found in the feedback".to_string(),
                ));
            }

            let record = s
                .progress
                .record(
                    scores,
                    req.job_role.as_deref(),
                    req.interview_type.as_deref(),
                    Utc::now(),
                )
                .clone();
            Ok(RecordScoresResponse {
                record,
                interview_count: s.progress.history().len(),
            })
        })
        .await?;

    info!(
        session_id = %id,
        overall = response.record.scores.overall,
        "Interview scores recorded"
    );
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/progress/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let tracker = &session.progress;
    if tracker.history().len() < MIN_INTERVIEWS_FOR_SUGGESTIONS {
        return Err(AppError::Validation(format!(
            "At least {MIN_INTERVIEWS_FOR_SUGGESTIONS} interviews are needed to compare progress"
        )));
    }
    let (first, last) = tracker
        .first_and_last()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("progress history vanished")))?;

    let turns = [
        ChatTurn::system(PROGRESS_COACH_SYSTEM),
        ChatTurn::user(suggestions_request(&first.scores, &last.scores, session.language)),
    ];
    let suggestions = state.llm.generate(&turns).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}
