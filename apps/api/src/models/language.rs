use serde::{Deserialize, Serialize};

/// Reply language. Also selects prompt wording and score patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    /// Instruction appended to system prompts so the model answers in this language.
    pub fn instruction(&self) -> &'static str {
        match self {
            Language::Vi => "Trả lời bằng tiếng Việt.",
            Language::En => "Answer in English.",
        }
    }

    /// Short "in <language>" phrase used inside analysis prompts.
    pub fn phrase(&self) -> &'static str {
        match self {
            Language::Vi => "bằng tiếng Việt",
            Language::En => "in English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vietnamese() {
        assert_eq!(Language::default(), Language::Vi);
    }

    #[test]
    fn test_serde_codes() {
        let lang: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(lang.instruction(), "Answer in English.");
    }
}
