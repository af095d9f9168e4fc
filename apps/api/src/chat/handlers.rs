use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::{attach_document, push_user_message, with_language_instruction};
use crate::documents::extract::DocumentKind;
use crate::documents::{extract_upload, read_upload};
use crate::errors::AppError;
use crate::models::{ChatTurn, Language};
use crate::sessions::SessionDocument;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Deserialize)]
pub struct SessionChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct SessionChatResponse {
    pub response: String,
    /// Conversation so far, without the system prompt.
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct SessionDocumentResponse {
    pub file_name: String,
    pub kind: DocumentKind,
    pub characters: usize,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if !req.messages.iter().any(|t| !t.is_system()) {
        return Err(AppError::Validation(
            "messages must contain at least one user or assistant turn".to_string(),
        ));
    }

    let turns = with_language_instruction(req.messages, req.language);
    let response = state.llm.generate(&turns).await?;
    Ok(Json(ChatResponse { response }))
}

/// POST /api/v1/sessions/:id/chat
pub async fn handle_session_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SessionChatRequest>,
) -> Result<Json<SessionChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let session = state.sessions.get(id).await?;
    let mut chat = session.chat;
    push_user_message(&mut chat, message, session.language);

    let response = state.llm.generate(&chat).await?;

    // The stored history may have moved on during the call (a document upload
    // or a clear), so the new exchange is appended to it rather than to the
    // snapshot.
    let history: Vec<ChatTurn> = state
        .sessions
        .update(id, |s| {
            push_user_message(&mut s.chat, message, s.language);
            s.chat.push(ChatTurn::assistant(response.clone()));
            Ok(s.chat.iter().filter(|t| !t.is_system()).cloned().collect())
        })
        .await?;

    Ok(Json(SessionChatResponse { response, history }))
}

/// POST /api/v1/sessions/:id/document
pub async fn handle_session_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SessionDocumentResponse>, AppError> {
    // Fail fast on unknown sessions before parsing the upload.
    state.sessions.get(id).await?;

    let (file_name, data) = read_upload(multipart).await?;
    let document = extract_upload(file_name, data).await?;
    let response = SessionDocumentResponse {
        file_name: document.file_name.clone(),
        kind: document.kind,
        characters: document.text.chars().count(),
    };

    state
        .sessions
        .update(id, |s| {
            attach_document(&mut s.chat, &document.text, s.language);
            s.document = Some(SessionDocument {
                file_name: document.file_name,
                text: document.text,
            });
            Ok(())
        })
        .await?;

    info!(session_id = %id, file_name = %response.file_name, "Document attached to session");
    Ok(Json(response))
}
