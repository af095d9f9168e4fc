use serde::{Deserialize, Serialize};

use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical,
    Behavioral,
    Hr,
    Case,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Hr => "hr",
            InterviewType::Case => "case",
        }
    }

    /// Human-readable name of the interview kind, e.g. "Technical Interview".
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (InterviewType::Technical, Language::En) => "Technical Interview",
            (InterviewType::Behavioral, Language::En) => "Behavioral Interview",
            (InterviewType::Hr, Language::En) => "HR Interview",
            (InterviewType::Case, Language::En) => "Case Interview",
            (InterviewType::Technical, Language::Vi) => "Phỏng vấn kỹ thuật",
            (InterviewType::Behavioral, Language::Vi) => "Phỏng vấn hành vi",
            (InterviewType::Hr, Language::Vi) => "Phỏng vấn HR",
            (InterviewType::Case, Language::Vi) => "Phỏng vấn tình huống",
        }
    }

    /// The interviewer persona used in the simulator system prompt.
    pub fn interviewer_role(&self, language: Language) -> &'static str {
        match (self, language) {
            (InterviewType::Technical, Language::En) => "technical interviewer",
            (InterviewType::Behavioral, Language::En) => "behavioral interviewer",
            (InterviewType::Hr, Language::En) => "HR interviewer",
            (InterviewType::Case, Language::En) => "case interviewer",
            (InterviewType::Technical, Language::Vi) => "người phỏng vấn kỹ thuật",
            (InterviewType::Behavioral, Language::Vi) => "người phỏng vấn hành vi",
            (InterviewType::Hr, Language::Vi) => "người phỏng vấn từ bộ phận nhân sự",
            (InterviewType::Case, Language::Vi) => "người phỏng vấn tình huống",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_type_serde() {
        let t: InterviewType = serde_json::from_str(r#""hr""#).unwrap();
        assert_eq!(t, InterviewType::Hr);
        assert_eq!(t.label(Language::En), "HR Interview");
    }
}
