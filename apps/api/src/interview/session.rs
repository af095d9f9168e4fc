//! Mock interview bookkeeping.
//!
//! The interviewer is a prompted model, so progress is inferred from text:
//! every interviewer reply containing a question mark counts as one question,
//! and the interview is considered over once enough questions were asked and
//! either the candidate asked to stop or the interviewer delivered its final
//! assessment. Nothing here enforces what the model says next.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::interview::prompts::{interviewer_system, opening_request};
use crate::models::{ChatTurn, InterviewType, Language, Role};
use crate::progress::scores::find_overall_score;

/// Questions the interviewer must ask before offering to wrap up.
pub const MIN_QUESTIONS: usize = 5;

// Matched as substrings, so "finish" also covers "finish the interview".
// Only consulted once `MIN_QUESTIONS` have been asked.
const END_PHRASES: &[&str] = &[
    "end the interview",
    "end this interview",
    "finish",
    "stop",
    "i want to end",
    "i'd like to end",
    "let's end",
    "let's wrap up",
    "wrap it up",
    "that's all",
    "no more questions",
    "kết thúc",
    "dừng",
    "ngừng phỏng vấn",
    "đủ rồi",
];

const END_OFFER_MARKERS: &[&str] = &["end the interview", "wrap up", "finish", "kết thúc", "dừng"];

const AFFIRMATIVE_STARTS: &[&str] = &["yes", "yeah", "yep", "sure", "ok", "okay", "có", "vâng", "dạ", "ừ", "đồng ý"];

const ASSESSMENT_MARKERS: &[&str] = &[
    "overall assessment",
    "overall score",
    "final assessment",
    "đánh giá tổng thể",
    "điểm tổng thể",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    /// Enough questions asked; the interviewer should offer to end.
    WrappingUp,
    Completed,
}

#[derive(Debug, Error, PartialEq)]
pub enum InterviewError {
    #[error("The interview has already ended")]
    AlreadyCompleted,

    #[error("Answer cannot be empty")]
    EmptyAnswer,

    #[error("No answers have been given yet")]
    NoAnswers,

    #[error("Feedback for this interview has already been recorded")]
    AlreadyGraded,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub id: Uuid,
    pub interview_type: InterviewType,
    pub job_role: Option<String>,
    pub language: Language,
    pub started_at: DateTime<Utc>,
    turns: Vec<ChatTurn>,
    question_count: usize,
    end_requested: bool,
    status: InterviewStatus,
    feedback_recorded: bool,
    /// Bumped on every change; lets a write-back detect concurrent edits.
    revision: u64,
}

impl InterviewSession {
    /// Builds the interviewer system prompt and the candidate's opening line.
    /// The interviewer's first reply still has to be generated and recorded.
    pub fn start(
        interview_type: InterviewType,
        job_role: Option<String>,
        resume: Option<String>,
        language: Language,
    ) -> Self {
        let job_role = job_role.filter(|r| !r.trim().is_empty());
        let resume = resume.filter(|r| !r.trim().is_empty());

        let turns = vec![
            ChatTurn::system(interviewer_system(
                interview_type,
                job_role.as_deref(),
                resume.as_deref(),
                language,
            )),
            ChatTurn::user(opening_request(interview_type, job_role.as_deref(), language)),
        ];

        Self {
            id: Uuid::new_v4(),
            interview_type,
            job_role,
            language,
            started_at: Utc::now(),
            turns,
            question_count: 0,
            end_requested: false,
            status: InterviewStatus::InProgress,
            feedback_recorded: false,
            revision: 0,
        }
    }

    /// Full conversation, system prompt included, as sent to the model.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Conversation without the system prompt.
    pub fn visible_turns(&self) -> Vec<ChatTurn> {
        self.turns.iter().filter(|t| !t.is_system()).cloned().collect()
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == InterviewStatus::Completed
    }

    pub fn feedback_recorded(&self) -> bool {
        self.feedback_recorded
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Candidate answers, not counting the opening request.
    pub fn answer_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.role == Role::User)
            .count()
            .saturating_sub(1)
    }

    pub fn record_answer(&mut self, answer: &str) -> Result<(), InterviewError> {
        if self.is_completed() {
            return Err(InterviewError::AlreadyCompleted);
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(InterviewError::EmptyAnswer);
        }

        if self.question_count >= MIN_QUESTIONS {
            let accepted_offer = self
                .last_interviewer_reply()
                .map(|reply| offers_to_end(reply) && is_affirmative(answer))
                .unwrap_or(false);
            if signals_end(answer) || accepted_offer {
                debug!("Candidate asked to end the interview");
                self.end_requested = true;
            }
        }

        self.turns.push(ChatTurn::user(answer));
        self.revision += 1;
        Ok(())
    }

    pub fn record_interviewer_reply(&mut self, reply: impl Into<String>) {
        let reply = reply.into();

        if asks_question(&reply) {
            self.question_count += 1;
        }

        if self.question_count >= MIN_QUESTIONS {
            let assessed = contains_final_assessment(&reply, self.language);
            self.status = if self.end_requested || assessed {
                InterviewStatus::Completed
            } else {
                InterviewStatus::WrappingUp
            };
        }

        debug!(
            question_count = self.question_count,
            status = ?self.status,
            "Interviewer reply recorded"
        );
        self.turns.push(ChatTurn::assistant(reply));
        self.revision += 1;
    }

    /// Marks the interview as over regardless of how far it got.
    pub fn complete(&mut self) {
        self.status = InterviewStatus::Completed;
        self.revision += 1;
    }

    /// Completes the interview and remembers that its scores went into the
    /// progress history, so they are never recorded twice.
    pub fn mark_feedback_recorded(&mut self) -> Result<(), InterviewError> {
        if self.feedback_recorded {
            return Err(InterviewError::AlreadyGraded);
        }
        self.feedback_recorded = true;
        self.complete();
        Ok(())
    }

    /// `ROLE: content` lines for everything after the system prompt.
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .filter(|t| !t.is_system())
            .map(|t| format!("{}: {}", t.role.as_str().to_uppercase(), t.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn last_interviewer_reply(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == Role::Assistant)
            .map(|t| t.content.as_str())
    }
}

pub fn asks_question(reply: &str) -> bool {
    reply.contains('?') || reply.contains('？')
}

pub fn signals_end(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    END_PHRASES.iter().any(|p| answer.contains(p))
}

fn offers_to_end(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    asks_question(&reply) && END_OFFER_MARKERS.iter().any(|m| reply.contains(m))
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    let first_word = answer
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .find(|w| !w.is_empty())
        .unwrap_or("");
    AFFIRMATIVE_STARTS
        .iter()
        .any(|a| first_word == *a || (a.contains(' ') && answer.starts_with(a)))
}

pub fn contains_final_assessment(reply: &str, language: Language) -> bool {
    let lower = reply.to_lowercase();
    ASSESSMENT_MARKERS.iter().any(|m| lower.contains(m))
        || find_overall_score(reply, language).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> InterviewSession {
        let mut session = InterviewSession::start(
            InterviewType::Behavioral,
            Some("Product Manager".to_string()),
            None,
            Language::En,
        );
        session.record_interviewer_reply("Hello, I'm Alex. Tell me about yourself?");
        session
    }

    fn ask_rounds(session: &mut InterviewSession, rounds: usize) {
        for i in 0..rounds {
            session.record_answer(&format!("Answer {i}")).unwrap();
            session.record_interviewer_reply(format!("Thanks. Question {}?", i + 2));
        }
    }

    #[test]
    fn test_start_builds_system_and_opening() {
        let session = InterviewSession::start(InterviewType::Technical, None, None, Language::En);
        assert_eq!(session.turns().len(), 2);
        assert!(session.turns()[0].is_system());
        assert_eq!(
            session.turns()[1].content,
            "I want to start a technical interview"
        );
        assert_eq!(session.answer_count(), 0);
        assert_eq!(session.status(), InterviewStatus::InProgress);
    }

    #[test]
    fn test_blank_job_role_is_dropped() {
        let session =
            InterviewSession::start(InterviewType::Hr, Some("   ".to_string()), None, Language::En);
        assert!(session.job_role.is_none());
    }

    #[test]
    fn test_question_counting() {
        let mut session = started();
        assert_eq!(session.question_count(), 1);

        session.record_answer("I like building products.").unwrap();
        session.record_interviewer_reply("Good answer. Let's move on.");
        assert_eq!(session.question_count(), 1);

        session.record_answer("Sure.").unwrap();
        session.record_interviewer_reply("Describe a conflict you resolved？");
        assert_eq!(session.question_count(), 2);
    }

    #[test]
    fn test_wrapping_up_after_min_questions() {
        let mut session = started();
        ask_rounds(&mut session, MIN_QUESTIONS - 2);
        assert_eq!(session.question_count(), MIN_QUESTIONS - 1);
        assert_eq!(session.status(), InterviewStatus::InProgress);

        ask_rounds(&mut session, 1);
        assert_eq!(session.question_count(), MIN_QUESTIONS);
        assert_eq!(session.status(), InterviewStatus::WrappingUp);
    }

    #[test]
    fn test_end_request_completes_after_min_questions() {
        let mut session = started();
        ask_rounds(&mut session, MIN_QUESTIONS - 1);

        session.record_answer("I'd like to end the interview now.").unwrap();
        session.record_interviewer_reply("Thank you. Here is my feedback on your performance.");
        assert!(session.is_completed());
    }

    #[test]
    fn test_early_end_request_is_ignored() {
        let mut session = started();
        session.record_answer("Let's end the interview").unwrap();
        session.record_interviewer_reply("We are just getting started. What motivates you?");
        assert_eq!(session.status(), InterviewStatus::InProgress);
    }

    #[test]
    fn test_accepting_end_offer() {
        let mut session = started();
        ask_rounds(&mut session, MIN_QUESTIONS - 2);
        session.record_answer("Answer").unwrap();
        session.record_interviewer_reply("Great. Would you like to end the interview here?");
        assert_eq!(session.status(), InterviewStatus::WrappingUp);

        session.record_answer("Yes, please.").unwrap();
        session.record_interviewer_reply("Thanks for your time, it was a pleasure.");
        assert!(session.is_completed());
    }

    #[test]
    fn test_final_assessment_completes() {
        let mut session = started();
        ask_rounds(&mut session, MIN_QUESTIONS - 1);
        session.record_answer("Happy to continue").unwrap();
        session.record_interviewer_reply("Overall assessment: solid. Overall score: 8/10.");
        assert!(session.is_completed());
    }

    #[test]
    fn test_answer_after_completion_rejected() {
        let mut session = started();
        session.complete();
        assert_eq!(
            session.record_answer("One more thing"),
            Err(InterviewError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut session = started();
        assert_eq!(session.record_answer("   "), Err(InterviewError::EmptyAnswer));
    }

    #[test]
    fn test_transcript_skips_system_prompt() {
        let mut session = started();
        session.record_answer("I am a PM.").unwrap();
        let transcript = session.transcript();
        assert!(transcript.starts_with("USER: I want to start a behavioral interview"));
        assert!(transcript.contains("ASSISTANT: Hello, I'm Alex."));
        assert!(transcript.ends_with("USER: I am a PM."));
        assert!(!transcript.contains("Interview rules"));
        assert_eq!(session.answer_count(), 1);
        assert_eq!(session.visible_turns().len(), 3);
    }

    #[test]
    fn test_signals_end_vietnamese() {
        assert!(signals_end("Tôi muốn kết thúc buổi phỏng vấn"));
        assert!(signals_end("Tôi muốn dừng ở đây"));
        assert!(signals_end("Dừng lại nhé"));
        assert!(!signals_end("Tôi đã làm việc 3 năm"));
        assert!(!signals_end("Tôi sử dụng Rust hằng ngày"));
    }

    #[test]
    fn test_signals_end_short_phrases() {
        assert!(signals_end("stop"));
        assert!(signals_end("I want to stop now"));
        assert!(signals_end("Can we finish here?"));
        assert!(signals_end("Please FINISH the interview"));
        assert!(signals_end("That's all from me"));
        assert!(!signals_end("I led the migration to Kubernetes"));
    }

    #[test]
    fn test_short_stop_completes_when_wrapping_up() {
        let mut session = started();
        ask_rounds(&mut session, MIN_QUESTIONS - 1);
        assert_eq!(session.status(), InterviewStatus::WrappingUp);

        session.record_answer("I want to stop now").unwrap();
        session.record_interviewer_reply("Understood, thank you for your time.");
        assert!(session.is_completed());
    }

    #[test]
    fn test_early_stop_keeps_interview_running() {
        let mut session = started();
        session.record_answer("I had to stop the project once").unwrap();
        session.record_interviewer_reply("Why did you stop it?");
        assert_eq!(session.status(), InterviewStatus::InProgress);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut session = started();
        let before = session.revision();
        session.record_answer("An answer").unwrap();
        assert_eq!(session.revision(), before + 1);
        session.record_interviewer_reply("Next question?");
        assert_eq!(session.revision(), before + 2);
        assert!(session.record_answer("  ").is_err());
        assert_eq!(session.revision(), before + 2);
    }

    #[test]
    fn test_feedback_recorded_once() {
        let mut session = started();
        assert!(!session.feedback_recorded());
        session.mark_feedback_recorded().unwrap();
        assert!(session.is_completed());
        assert!(session.feedback_recorded());
        assert_eq!(
            session.mark_feedback_recorded(),
            Err(InterviewError::AlreadyGraded)
        );
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("Yes, let's stop"));
        assert!(is_affirmative("Vâng ạ"));
        assert!(!is_affirmative("Yesterday I shipped a feature"));
    }
}
