//! Interview history and per-skill progress aggregation for one session.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Language;
use crate::progress::scores::InterviewScores;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Overall,
    Technical,
    Communication,
    ProblemSolving,
    Leadership,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Overall,
        Skill::Technical,
        Skill::Communication,
        Skill::ProblemSolving,
        Skill::Leadership,
    ];

    pub fn score_in(&self, scores: &InterviewScores) -> u32 {
        match self {
            Skill::Overall => scores.overall,
            Skill::Technical => scores.technical,
            Skill::Communication => scores.communication,
            Skill::ProblemSolving => scores.problem_solving,
            Skill::Leadership => scores.leadership,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Skill::Overall, Language::En) => "Overall",
            (Skill::Technical, Language::En) => "Technical",
            (Skill::Communication, Language::En) => "Communication",
            (Skill::ProblemSolving, Language::En) => "Problem Solving",
            (Skill::Leadership, Language::En) => "Leadership",
            (Skill::Overall, Language::Vi) => "Tổng thể",
            (Skill::Technical, Language::Vi) => "Kỹ thuật",
            (Skill::Communication, Language::Vi) => "Giao tiếp",
            (Skill::ProblemSolving, Language::Vi) => "Giải quyết vấn đề",
            (Skill::Leadership, Language::Vi) => "Lãnh đạo",
        }
    }
}

/// One completed mock interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRecord {
    #[serde(flatten)]
    pub scores: InterviewScores,
    pub job_role: String,
    pub interview_type: String,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSample {
    pub score: u32,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

/// First-vs-current comparison for one skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillProgress {
    pub skill: Skill,
    pub label: String,
    pub first: u32,
    pub current: u32,
    pub improvement: i64,
    /// `+N` when improved, otherwise the plain number.
    pub improvement_label: String,
    pub best: u32,
    pub average: f64,
}

/// One x-axis point of the progress chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub scores: BTreeMap<Skill, u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressTracker {
    history: Vec<InterviewRecord>,
    samples: BTreeMap<Skill, Vec<ScoreSample>>,
}

impl ProgressTracker {
    /// Appends an interview to the history. Skills that scored 0 get no sample.
    pub fn record(
        &mut self,
        scores: InterviewScores,
        job_role: Option<&str>,
        interview_type: Option<&str>,
        at: DateTime<Utc>,
    ) -> &InterviewRecord {
        let date = at.date_naive();
        for skill in Skill::ALL {
            let score = skill.score_in(&scores);
            if score > 0 {
                self.samples.entry(skill).or_default().push(ScoreSample {
                    score,
                    date,
                    timestamp: at,
                });
            }
        }

        self.history.push(InterviewRecord {
            scores,
            job_role: non_blank_or_unknown(job_role),
            interview_type: non_blank_or_unknown(interview_type),
            date,
            timestamp: at,
        });
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[InterviewRecord] {
        &self.history
    }

    pub fn samples(&self, skill: Skill) -> &[ScoreSample] {
        self.samples.get(&skill).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_and_last(&self) -> Option<(&InterviewRecord, &InterviewRecord)> {
        Some((self.history.first()?, self.history.last()?))
    }

    /// Per-skill comparison of the first and the latest interview.
    pub fn summary(&self, language: Language) -> Vec<SkillProgress> {
        let Some((first, last)) = self.first_and_last() else {
            return Vec::new();
        };

        Skill::ALL
            .iter()
            .map(|skill| {
                let first_score = skill.score_in(&first.scores);
                let current = skill.score_in(&last.scores);
                let improvement = current as i64 - first_score as i64;
                let samples = self.samples(*skill);
                let best = samples.iter().map(|s| s.score).max().unwrap_or(0);
                let average = if samples.is_empty() {
                    0.0
                } else {
                    samples.iter().map(|s| s.score as f64).sum::<f64>() / samples.len() as f64
                };

                SkillProgress {
                    skill: *skill,
                    label: skill.label(language).to_string(),
                    first: first_score,
                    current,
                    improvement,
                    improvement_label: improvement_label(improvement),
                    best,
                    average,
                }
            })
            .collect()
    }

    /// Chart series keyed on the overall samples. Each skill contributes the
    /// sample closest in time to the overall sample, or 0 when it has none.
    pub fn chart(&self) -> Vec<ChartPoint> {
        self.samples(Skill::Overall)
            .iter()
            .map(|anchor| {
                let scores = Skill::ALL
                    .iter()
                    .map(|skill| {
                        let closest = self
                            .samples(*skill)
                            .iter()
                            .min_by_key(|s| (s.timestamp - anchor.timestamp).num_milliseconds().abs())
                            .map(|s| s.score)
                            .unwrap_or(0);
                        (*skill, closest)
                    })
                    .collect();
                ChartPoint {
                    date: anchor.date,
                    timestamp: anchor.timestamp,
                    scores,
                }
            })
            .collect()
    }
}

pub fn improvement_label(improvement: i64) -> String {
    if improvement > 0 {
        format!("+{improvement}")
    } else {
        improvement.to_string()
    }
}

fn non_blank_or_unknown(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}
