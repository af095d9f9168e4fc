// Progress coaching prompt templates.

use crate::models::Language;
use crate::progress::scores::{InterviewScores, MAX_SCORE};
use crate::progress::tracker::Skill;

pub const PROGRESS_COACH_SYSTEM: &str = "You are an interview coach analyzing progress";

/// "Overall 6/10, Technical 7/10, ..." in the requested language.
pub fn format_scores(scores: &InterviewScores, language: Language) -> String {
    Skill::ALL
        .iter()
        .map(|skill| format!("{} {}/{MAX_SCORE}", skill.label(language), skill.score_in(scores)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn suggestions_request(
    first: &InterviewScores,
    current: &InterviewScores,
    language: Language,
) -> String {
    let first = format_scores(first, language);
    let current = format_scores(current, language);
    match language {
        Language::En => format!(
            "Analyze the candidate's interview progress:
- First interview scores: {first}
- Current scores: {current}

Provide specific suggestions for improvement in each skill area.
Keep your response concise and actionable.
Answer in English."
        ),
        Language::Vi => format!(
            "Phân tích tiến trình phỏng vấn của ứng viên:
- Điểm phỏng vấn đầu tiên: {first}
- Điểm hiện tại: {current}

Đưa ra những gợi ý cụ thể để cải thiện từng lĩnh vực kỹ năng.
Giữ phản hồi của bạn ngắn gọn và có thể thực hiện được.
Trả lời bằng tiếng Việt."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scores() {
        let scores = InterviewScores {
            overall: 6,
            technical: 7,
            communication: 5,
            problem_solving: 6,
            leadership: 4,
        };
        assert_eq!(
            format_scores(&scores, Language::En),
            "Overall 6/10, Technical 7/10, Communication 5/10, Problem Solving 6/10, Leadership 4/10"
        );
    }

    #[test]
    fn test_suggestions_request_vietnamese() {
        let prompt = suggestions_request(
            &InterviewScores::default(),
            &InterviewScores::default(),
            Language::Vi,
        );
        assert!(prompt.contains("Điểm phỏng vấn đầu tiên: Tổng thể 0/10"));
        assert!(prompt.ends_with("Trả lời bằng tiếng Việt."));
    }
}
