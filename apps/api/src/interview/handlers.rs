use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::prompts::{coach_system, feedback_request};
use crate::interview::session::{InterviewError, InterviewSession, InterviewStatus, MIN_QUESTIONS};
use crate::models::{ChatTurn, InterviewType, Language};
use crate::progress::scores::{extract_scores, InterviewScores};
use crate::sessions::Session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartInterviewRequest {
    pub interview_type: InterviewType,
    pub job_role: Option<String>,
    /// Falls back to the document attached to the session.
    pub resume: Option<String>,
    /// Defaults to the session language.
    pub language: Option<Language>,
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct InterviewStateResponse {
    pub interview_type: InterviewType,
    pub job_role: Option<String>,
    pub language: Language,
    pub status: InterviewStatus,
    pub question_count: usize,
    pub min_questions: usize,
    pub answer_count: usize,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<ChatTurn>,
}

impl From<&InterviewSession> for InterviewStateResponse {
    fn from(interview: &InterviewSession) -> Self {
        Self {
            interview_type: interview.interview_type,
            job_role: interview.job_role.clone(),
            language: interview.language,
            status: interview.status(),
            question_count: interview.question_count(),
            min_questions: MIN_QUESTIONS,
            answer_count: interview.answer_count(),
            started_at: interview.started_at,
            turns: interview.visible_turns(),
        }
    }
}

#[derive(Serialize)]
pub struct InterviewReplyResponse {
    pub reply: String,
    pub status: InterviewStatus,
    pub question_count: usize,
}

#[derive(Serialize)]
pub struct InterviewFeedbackResponse {
    pub feedback: String,
    pub scores: InterviewScores,
    /// False when no score could be read from the feedback.
    pub recorded: bool,
}

fn current_interview(session: Session) -> Result<InterviewSession, AppError> {
    let id = session.id;
    session
        .interview
        .ok_or_else(|| AppError::NotFound(format!("No interview started in session {id}")))
}

/// The stored interview, provided it is still the one a handler read before
/// calling the model and nothing has changed it since.
fn unchanged_interview<'a>(
    session: &'a mut Session,
    snapshot: &InterviewSession,
    revision: u64,
) -> Result<&'a mut InterviewSession, AppError> {
    match session.interview.as_mut() {
        Some(current) if current.id == snapshot.id && current.revision() == revision => Ok(current),
        _ => Err(AppError::Conflict(
            "The interview changed while this request was being processed".to_string(),
        )),
    }
}

/// POST /api/v1/sessions/:id/interview
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartInterviewRequest>,
) -> Result<Json<InterviewStateResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let language = req.language.unwrap_or(session.language);
    let resume = req
        .resume
        .or_else(|| session.document.map(|doc| doc.text));

    let mut interview = InterviewSession::start(req.interview_type, req.job_role, resume, language);
    let reply = state.llm.generate(interview.turns()).await?;
    interview.record_interviewer_reply(reply);

    let response = InterviewStateResponse::from(&interview);
    state
        .sessions
        .update(id, move |s| {
            s.interview = Some(interview);
            Ok(())
        })
        .await?;

    info!(
        session_id = %id,
        interview_type = req.interview_type.as_str(),
        "Interview started"
    );
    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/interview
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewStateResponse>, AppError> {
    let interview = current_interview(state.sessions.get(id).await?)?;
    Ok(Json(InterviewStateResponse::from(&interview)))
}

/// POST /api/v1/sessions/:id/interview/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<InterviewReplyResponse>, AppError> {
    let mut interview = current_interview(state.sessions.get(id).await?)?;
    let revision = interview.revision();
    interview.record_answer(&req.answer)?;

    let reply = state.llm.generate(interview.turns()).await?;
    interview.record_interviewer_reply(reply.clone());

    let response = InterviewReplyResponse {
        reply,
        status: interview.status(),
        question_count: interview.question_count(),
    };

    let completed = interview.is_completed();
    state
        .sessions
        .update(id, move |s| {
            let current = unchanged_interview(s, &interview, revision)?;
            *current = interview;
            Ok(())
        })
        .await?;

    if completed {
        info!(session_id = %id, questions = response.question_count, "Interview completed");
    }
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/interview/finish
pub async fn handle_finish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewFeedbackResponse>, AppError> {
    let interview = current_interview(state.sessions.get(id).await?)?;
    if interview.feedback_recorded() {
        return Err(InterviewError::AlreadyGraded.into());
    }
    if interview.answer_count() == 0 {
        return Err(InterviewError::NoAnswers.into());
    }

    let language = interview.language;
    let turns = [
        ChatTurn::system(coach_system(language)),
        ChatTurn::user(feedback_request(&interview.transcript(), language)),
    ];
    let feedback = state.llm.generate(&turns).await?;
    let scores = extract_scores(&feedback, language);
    let recorded = !scores.is_empty();

    // Answers that arrived while the feedback was generated stay in place;
    // only a replaced or already graded interview is rejected.
    state
        .sessions
        .update(id, move |s| {
            let current = match s.interview.as_mut() {
                Some(current) if current.id == interview.id => current,
                _ => {
                    return Err(AppError::Conflict(
                        "The interview changed while this request was being processed".to_string(),
                    ))
                }
            };
            if !recorded {
                current.complete();
                return Ok(());
            }
            current.mark_feedback_recorded()?;
            s.progress.record(
                scores,
                interview.job_role.as_deref(),
                Some(interview.interview_type.as_str()),
                Utc::now(),
            );
            Ok(())
        })
        .await?;

    info!(session_id = %id, overall = scores.overall, recorded, "Interview feedback generated");
    Ok(Json(InterviewFeedbackResponse {
        feedback,
        scores,
        recorded,
    }))
}
