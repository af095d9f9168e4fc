//! Keyword skill matching between a resume and a job description.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Skills recognized in free text.
pub const COMMON_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "angular", "vue", "node.js", "html", "css",
    "sql", "nosql", "mongodb", "mysql", "postgresql", "oracle", "aws", "azure", "gcp",
    "docker", "kubernetes", "ci/cd", "git", "agile", "scrum", "leadership", "management",
    "communication", "teamwork", "problem solving", "critical thinking", "creativity",
    "data analysis", "machine learning", "ai", "deep learning", "nlp", "computer vision",
    "excel", "word", "powerpoint", "presentation", "project management", "marketing",
    "sales", "customer service", "accounting", "finance", "human resources", "recruiting",
];

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern must compile"));

/// One whole-word pattern per skill, matched against normalized text.
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|&skill| {
            let pattern = format!(r"\b{}\b", regex::escape(&normalize(skill)));
            (skill, Regex::new(&pattern).expect("skill pattern must compile"))
        })
        .collect()
});

/// Lower-cases and replaces punctuation with spaces, so "Node.js" becomes "node js".
fn normalize(text: &str) -> String {
    PUNCTUATION.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Known skills mentioned in `text`, sorted.
pub fn extract_skills(text: &str) -> BTreeSet<&'static str> {
    let text = normalize(text);
    SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&text))
        .map(|(skill, _)| *skill)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsComparison {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    /// Share of the job's skills found in the resume, 0 when the job names none.
    pub match_percentage: f64,
}

pub fn compare(resume: &str, job_description: &str) -> SkillsComparison {
    let resume_skills = extract_skills(resume);
    let job_skills = extract_skills(job_description);

    // BTreeSet set operations iterate in sorted order.
    let matching: Vec<String> = resume_skills.intersection(&job_skills).map(|s| s.to_string()).collect();
    let missing: Vec<String> = job_skills.difference(&resume_skills).map(|s| s.to_string()).collect();
    let extra: Vec<String> = resume_skills.difference(&job_skills).map(|s| s.to_string()).collect();

    let match_percentage = if job_skills.is_empty() {
        0.0
    } else {
        matching.len() as f64 / job_skills.len() as f64 * 100.0
    };

    SkillsComparison {
        matching_skills: matching,
        missing_skills: missing,
        extra_skills: extra,
        match_percentage,
    }
}
