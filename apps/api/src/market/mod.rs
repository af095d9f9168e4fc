//! Job market insights. The model is asked for JSON but frequently wraps it in
//! prose or fences, so the reply is parsed leniently.

pub mod handlers;
pub mod prompts;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::llm_client::strip_json_fences;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub salary_range: String,
    pub top_skills: Vec<String>,
    pub hiring_trends: String,
    pub top_companies: Vec<String>,
    pub growth_forecast: String,
}

/// Lenient mirror of the JSON the model is asked to produce.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInsights {
    salary_range: Option<Value>,
    top_skills: Option<Value>,
    hiring_trends: Option<Value>,
    top_companies: Option<Value>,
    growth_forecast: Option<Value>,
}

static SALARY_RANGE: Lazy<Regex> = Lazy::new(|| string_field("salary_range"));
static HIRING_TRENDS: Lazy<Regex> = Lazy::new(|| string_field("hiring_trends"));
static GROWTH_FORECAST: Lazy<Regex> = Lazy::new(|| string_field("growth_forecast"));
static TOP_SKILLS: Lazy<Regex> = Lazy::new(|| list_field("top_skills"));
static TOP_COMPANIES: Lazy<Regex> = Lazy::new(|| list_field("top_companies"));

fn string_field(name: &str) -> Regex {
    Regex::new(&format!(r#""{name}"\s*:\s*"([^"]*)""#)).expect("field pattern must compile")
}

fn list_field(name: &str) -> Regex {
    Regex::new(&format!(r#"(?s)"{name}"\s*:\s*\[(.*?)\]"#)).expect("field pattern must compile")
}

/// Parses a model reply: fenced or embedded JSON first, then per-field patterns.
/// Missing fields become `"N/A"` (`["N/A"]` for lists).
pub fn parse_insights(reply: &str) -> MarketInsights {
    let text = strip_json_fences(reply);
    if let Some(raw) = outer_json_object(text) {
        match serde_json::from_str::<RawInsights>(raw) {
            Ok(parsed) => return from_raw(parsed),
            Err(e) => warn!("Market reply is not valid JSON, falling back to patterns: {e}"),
        }
    }

    debug!("Recovering market insight fields with patterns");
    MarketInsights {
        salary_range: capture_string(&SALARY_RANGE, text),
        top_skills: capture_list(&TOP_SKILLS, text),
        hiring_trends: capture_string(&HIRING_TRENDS, text),
        top_companies: capture_list(&TOP_COMPANIES, text),
        growth_forecast: capture_string(&GROWTH_FORECAST, text),
    }
}

/// Slice from the first `{` to the last `}`.
fn outer_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn from_raw(raw: RawInsights) -> MarketInsights {
    MarketInsights {
        salary_range: value_text(raw.salary_range),
        top_skills: value_list(raw.top_skills),
        hiring_trends: value_text(raw.hiring_trends),
        top_companies: value_list(raw.top_companies),
        growth_forecast: value_text(raw.growth_forecast),
    }
}

fn value_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Null) | Some(Value::String(_)) | None => NOT_AVAILABLE.to_string(),
        Some(other) => other.to_string(),
    }
}

fn value_list(value: Option<Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| value_text(Some(item)))
            .filter(|item| item != NOT_AVAILABLE)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    };
    if items.is_empty() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        items
    }
}

fn capture_string(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn capture_list(pattern: &Regex, text: &str) -> Vec<String> {
    let items: Vec<String> = pattern
        .captures(text)
        .map(|c| {
            c[1].split(',')
                .map(|item| item.trim().trim_matches(|ch: char| ch == '"' || ch == '\'').trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if items.is_empty() {
        vec![NOT_AVAILABLE.to_string()]
    } else {
        items
    }
}
