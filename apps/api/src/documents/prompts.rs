// Document analysis prompt templates.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    ResumeImprovements,
    JobKeywords,
    SkillsGap,
    Custom,
}

/// Builds the user prompt for one analysis. `custom` needs a non-blank `custom_prompt`.
pub fn analysis_prompt(
    analysis_type: AnalysisType,
    content: &str,
    custom_prompt: Option<&str>,
    language: Language,
) -> Result<String, AppError> {
    let lang = language.phrase();
    let prompt = match (analysis_type, language) {
        (AnalysisType::ResumeImprovements, Language::En) => format!(
            "Analyze the following resume and give specific suggestions to improve it {lang}: {content}"
        ),
        (AnalysisType::ResumeImprovements, Language::Vi) => format!(
            "Phân tích CV sau đây và đưa ra các gợi ý cụ thể để cải thiện {lang}: {content}"
        ),
        (AnalysisType::JobKeywords, Language::En) => format!(
            "Extract the important keywords and skills from the following job description, \
             grouped by importance, {lang}: {content}"
        ),
        (AnalysisType::JobKeywords, Language::Vi) => format!(
            "Trích xuất các từ khóa và kỹ năng quan trọng từ mô tả công việc sau, \
             phân loại theo mức độ quan trọng {lang}: {content}"
        ),
        (AnalysisType::SkillsGap, Language::En) => format!(
            "Analyze the skills gap between the following resume and job requirements {lang}. \
             Give concrete suggestions for closing the gap: {content}"
        ),
        (AnalysisType::SkillsGap, Language::Vi) => format!(
            "Phân tích khoảng cách kỹ năng giữa sơ yếu lý lịch và yêu cầu công việc sau {lang}. \
             Đưa ra đề xuất cụ thể về cách thu hẹp khoảng cách này: {content}"
        ),
        (AnalysisType::Custom, _) => {
            let custom = custom_prompt
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or_else(|| {
                    AppError::Validation("custom_prompt is required for custom analysis".to_string())
                })?;
            format!("{custom} {lang}: {content}")
        }
    };
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_improvements_vietnamese() {
        let prompt =
            analysis_prompt(AnalysisType::ResumeImprovements, "CV text", None, Language::Vi).unwrap();
        assert!(prompt.starts_with("Phân tích CV"));
        assert!(prompt.contains("bằng tiếng Việt"));
        assert!(prompt.ends_with("CV text"));
    }

    #[test]
    fn test_custom_uses_caller_prompt() {
        let prompt = analysis_prompt(
            AnalysisType::Custom,
            "JD text",
            Some("Summarize this"),
            Language::En,
        )
        .unwrap();
        assert_eq!(prompt, "Summarize this in English: JD text");
    }

    #[test]
    fn test_custom_without_prompt_is_rejected() {
        for custom in [None, Some("   ")] {
            let result = analysis_prompt(AnalysisType::Custom, "x", custom, Language::En);
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_analysis_type_codes() {
        let parsed: AnalysisType = serde_json::from_str(r#""job_keywords""#).unwrap();
        assert_eq!(parsed, AnalysisType::JobKeywords);
    }
}
