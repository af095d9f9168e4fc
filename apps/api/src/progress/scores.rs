//! Score extraction: pulls 1-10 ratings out of free-text interview feedback.
//!
//! The model is asked for an "overall score (1-10)" but answers in prose, so the
//! scores are recovered with per-language patterns and filled in heuristically:
//!
//! 1. Overall: explicit "overall/final/total score: N/10" phrase, else the first `N/10`.
//! 2. Components: their own phrase; when missing they inherit the overall score
//!    (leadership gets 80% of it, at least 1).
//! 3. No overall but some components: overall is their integer mean.
//!
//! A score of 0 means "not found".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Language;

pub const MAX_SCORE: u32 = 10;

/// Scores recovered from one feedback text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScores {
    pub overall: u32,
    pub technical: u32,
    pub communication: u32,
    pub problem_solving: u32,
    pub leadership: u32,
}

impl InterviewScores {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

struct ScorePatterns {
    overall: Regex,
    technical: Regex,
    communication: Regex,
    problem_solving: Regex,
    leadership: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("score pattern must compile")
}

static EN_PATTERNS: Lazy<ScorePatterns> = Lazy::new(|| ScorePatterns {
    overall: compile(
        r"(?:overall\s*(?:score|assessment|rating|evaluation|grade|mark|result)|final\s*(?:score|assessment|rating|evaluation|grade|mark|result)|total\s*(?:score|assessment|rating)|assessment\s*(?:score|result)|evaluation\s*(?:score|result)|score\s*overall)[:\s]*(\d+)[\s/]*10",
    ),
    technical: compile(r"(?:technical\s*(?:skills?|knowledge|competency))[:\s]*(\d+)[\s/]*10"),
    communication: compile(r"(?:communication\s*(?:skills?|ability))[:\s]*(\d+)[\s/]*10"),
    problem_solving: compile(r"(?:problem[\s-]*solving\s*(?:skills?|ability))[:\s]*(\d+)[\s/]*10"),
    leadership: compile(r"(?:leadership\s*(?:skills?|ability|quality))[:\s]*(\d+)[\s/]*10"),
});

static VI_PATTERNS: Lazy<ScorePatterns> = Lazy::new(|| ScorePatterns {
    overall: compile(
        r"(?:điểm\s*(?:số|đánh giá|tổng)(?:\s*(?:tổng thể|chung|cuối cùng))?|đánh giá tổng thể|tổng\s*(?:điểm|số)|điểm\s*tổng\s*kết)[:\s]*(\d+)[\s/]*10",
    ),
    technical: compile(r"(?:kỹ\s*thuật|technical)[:\s]*(\d+)[\s/]*10"),
    communication: compile(r"(?:giao\s*tiếp|communication|trình\s*bày)[:\s]*(\d+)[\s/]*10"),
    problem_solving: compile(
        r"(?:giải\s*quyết\s*vấn\s*đề|problem\s*solving|khả\s*năng\s*xử\s*lý)[:\s]*(\d+)[\s/]*10",
    ),
    leadership: compile(r"(?:lãnh\s*đạo|leadership|quản\s*lý)[:\s]*(\d+)[\s/]*10"),
});

static OUT_OF_TEN: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)\s*/\s*10"));

fn patterns(language: Language) -> &'static ScorePatterns {
    match language {
        Language::En => &EN_PATTERNS,
        Language::Vi => &VI_PATTERNS,
    }
}

fn parse_score(raw: &str) -> Option<u32> {
    raw.parse::<u32>()
        .ok()
        .filter(|s| (1..=MAX_SCORE).contains(s))
}

fn capture_score(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_score(m.as_str()))
}

/// The overall score as stated in the feedback, without component fallbacks.
pub fn find_overall_score(feedback: &str, language: Language) -> Option<u32> {
    let text = feedback.to_lowercase();
    capture_score(&patterns(language).overall, &text).or_else(|| {
        OUT_OF_TEN
            .captures_iter(&text)
            .find_map(|c| c.get(1).and_then(|m| parse_score(m.as_str())))
    })
}

/// Extracts all five scores from interview feedback.
pub fn extract_scores(feedback: &str, language: Language) -> InterviewScores {
    let text = feedback.to_lowercase();
    let p = patterns(language);

    let mut overall = find_overall_score(&text, language).unwrap_or(0);

    let component = |re: &Regex, fallback: u32| -> u32 {
        match capture_score(re, &text) {
            Some(score) => score,
            None if overall > 0 => fallback,
            None => 0,
        }
    };

    let technical = component(&p.technical, overall);
    let communication = component(&p.communication, overall);
    let problem_solving = component(&p.problem_solving, overall);
    let leadership = component(&p.leadership, (overall * 4 / 5).max(1));

    if overall == 0 {
        let found: Vec<u32> = [technical, communication, problem_solving, leadership]
            .into_iter()
            .filter(|s| *s > 0)
            .collect();
        if !found.is_empty() {
            overall = found.iter().sum::<u32>() / found.len() as u32;
            debug!("Overall score derived from {} component scores", found.len());
        }
    }

    let scores = InterviewScores {
        overall,
        technical,
        communication,
        problem_solving,
        leadership,
    };
    debug!(?scores, "Extracted interview scores");
    scores
}
