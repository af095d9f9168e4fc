//! In-memory session store.
//!
//! Each browser session owns its chat history, uploaded document, running mock
//! interview and progress history. Nothing is persisted: a session lives until
//! it is deleted or sits idle past the configured TTL.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::InterviewSession;
use crate::models::{ChatTurn, Language};
use crate::progress::tracker::ProgressTracker;

/// Text extracted from a file the user attached to the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDocument {
    pub file_name: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub chat: Vec<ChatTurn>,
    pub document: Option<SessionDocument>,
    pub interview: Option<InterviewSession>,
    pub progress: ProgressTracker,
}

impl Session {
    pub fn new(language: Language) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            language,
            created_at: now,
            last_seen: now,
            chat: Vec::new(),
            document: None,
            interview: None,
            progress: ProgressTracker::default(),
        }
    }

    /// Drops chat history and the attached document. Interview progress is kept.
    pub fn clear_chat(&mut self) {
        self.chat.clear();
        self.document = None;
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::minutes(ttl_minutes.max(1)),
        }
    }

    /// Creates a session and prunes the ones that have expired.
    pub async fn create(&self, language: Language) -> Session {
        let session = Session::new(language);
        let mut sessions = self.inner.write().await;

        let cutoff = Utc::now() - self.ttl;
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen >= cutoff);
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!("Pruned {pruned} idle sessions");
        }

        sessions.insert(session.id, session.clone());
        debug!(session_id = %session.id, "Session created");
        session
    }

    /// Returns a snapshot of the session. No lock is held afterwards, so the
    /// caller may await an LLM call and write back with `update`.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| session_not_found(id))
    }

    /// Applies `f` to the stored session and refreshes its idle timer.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.last_seen = Utc::now();
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| session_not_found(id))
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new(60);
        let session = store.create(Language::En).await;

        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.language, Language::En);

        store.remove(session.id).await.unwrap();
        assert!(matches!(
            store.get(session.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_mutates_stored_session() {
        let store = SessionStore::new(60);
        let id = store.create(Language::Vi).await.id;

        store
            .update(id, |s| {
                s.chat.push(ChatTurn::user("hello"));
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(store.get(id).await.unwrap().chat.len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let store = SessionStore::new(60);
        let result = store.update(Uuid::new_v4(), |_| Ok(())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_prunes_idle_sessions() {
        let store = SessionStore::new(1);
        let stale = store.create(Language::En).await.id;
        {
            let mut sessions = store.inner.write().await;
            let s = sessions.get_mut(&stale).unwrap();
            s.last_seen = Utc::now() - Duration::minutes(5);
        }

        store.create(Language::En).await;
        assert_eq!(store.len().await, 1);
        assert!(store.get(stale).await.is_err());
    }

    #[test]
    fn test_clear_chat_keeps_progress() {
        let mut session = Session::new(Language::En);
        session.chat.push(ChatTurn::user("hi"));
        session.document = Some(SessionDocument {
            file_name: "cv.txt".to_string(),
            text: "Rust".to_string(),
        });
        session.progress.record(Default::default(), None, None, Utc::now());

        session.clear_chat();
        assert!(session.chat.is_empty());
        assert!(session.document.is_none());
        assert_eq!(session.progress.history().len(), 1);
    }
}
