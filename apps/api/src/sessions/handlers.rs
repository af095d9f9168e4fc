use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Language;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/sessions
/// The body is optional; without one the session uses the default language.
pub async fn handle_create_session(
    State(state): State<AppState>,
    req: Option<Json<CreateSessionRequest>>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let req = req.map(|Json(req)| req).unwrap_or_default();
    let session = state.sessions.create(req.language).await;
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session.id,
            language: session.language,
            created_at: session.created_at,
        }),
    )
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/clear
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |s| {
            s.clear_chat();
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
