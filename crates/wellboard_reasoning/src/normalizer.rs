//! Response normalization: untrusted model text in, typed tips out.
//!
//! Neither entry point can fail. When the text cannot be parsed, or parses
//! to the wrong shape, the deterministic fallback is returned instead.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use wellboard_core::{Difficulty, GoalCategory, Profile, Tip};

use crate::fallback::{fallback_description, fallback_detail, fallback_steps, fallback_tips};
use crate::prompts::random_suffix;

/// Upper bound on tips taken from a single response.
pub const MAX_TIPS: usize = 5;

const DEFAULT_SHORT_DESCRIPTION: &str = "No description available";
const DEFAULT_ICON: &str = "💪";
const DEFAULT_ESTIMATED_TIME: &str = "5 minutes";
const DEFAULT_BENEFIT: &str = "Improved wellness";
const DEFAULT_TAG: &str = "wellness";

static RE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json|JSON)?[ \t]*\r?\n?").unwrap());

/// `<prefix>-<unix millis>-<9 random chars>-<index>`
pub fn mint_tip_id(prefix: &str, index: usize) -> String {
    format!(
        "{}-{}-{}-{}",
        prefix,
        Utc::now().timestamp_millis(),
        random_suffix(9),
        index
    )
}

/// Remove every code-fence marker and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    RE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parse the payload, retrying on the outermost `open..=close` span when the
/// model wrapped the JSON in prose.
fn parse_payload(text: &str, open: char, close: char) -> Option<Value> {
    let cleaned = strip_code_fences(text);
    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        return Some(value);
    }
    let start = cleaned.find(open)?;
    let end = cleaned.rfind(close)?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&cleaned[start..=end]).ok()
}

fn text_field(item: &Value, key: &str) -> Option<String> {
    item.get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn list_field(item: &Value, key: &str) -> Option<Vec<String>> {
    let values = item.get(key)?.as_array()?;
    Some(
        values
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
    )
}

fn tip_from_value(item: &Value, index: usize, profile: &Profile, now: DateTime<Utc>) -> Tip {
    Tip {
        id: mint_tip_id("tip", index),
        title: text_field(item, "title").unwrap_or_else(|| format!("Wellness Tip {}", index + 1)),
        short_description: text_field(item, "shortDescription")
            .unwrap_or_else(|| DEFAULT_SHORT_DESCRIPTION.to_string()),
        full_description: None,
        category: text_field(item, "category")
            .and_then(|c| GoalCategory::parse_str(&c))
            .unwrap_or(GoalCategory::Fitness),
        icon: text_field(item, "icon").unwrap_or_else(|| DEFAULT_ICON.to_string()),
        difficulty: text_field(item, "difficulty")
            .and_then(|d| Difficulty::parse_str(&d.to_ascii_lowercase()))
            .unwrap_or_default(),
        estimated_time: text_field(item, "estimatedTime")
            .unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
        steps: None,
        benefits: list_field(item, "benefits").unwrap_or_else(|| vec![DEFAULT_BENEFIT.to_string()]),
        tags: list_field(item, "tags").unwrap_or_else(|| vec![DEFAULT_TAG.to_string()]),
        is_favorite: false,
        created_at: now,
        generated_for: Some(profile.clone()),
    }
}

pub fn normalize_tips_list(raw: &str, profile: &Profile) -> Vec<Tip> {
    let items = match parse_payload(raw, '[', ']') {
        Some(Value::Array(items)) if !items.is_empty() => items,
        Some(Value::Array(_)) => {
            tracing::warn!("Model returned an empty tip list, using fallback tips");
            return fallback_tips(profile);
        }
        Some(_) => {
            tracing::warn!("Model response is not a JSON array, using fallback tips");
            return fallback_tips(profile);
        }
        None => {
            tracing::warn!(
                "Could not parse model response, using fallback tips: {}",
                raw.chars().take(200).collect::<String>()
            );
            return fallback_tips(profile);
        }
    };

    let now = Utc::now();
    items
        .iter()
        .take(MAX_TIPS)
        .enumerate()
        .map(|(index, item)| tip_from_value(item, index, profile, now))
        .collect()
}

pub fn normalize_tip_detail(raw: &str, original: &Tip) -> Tip {
    let fields = match parse_payload(raw, '{', '}') {
        Some(value @ Value::Object(_)) => value,
        _ => {
            tracing::warn!("Could not parse detail response for '{}', using fallback", original.title);
            return fallback_detail(original);
        }
    };

    let steps = list_field(&fields, "steps")
        .filter(|steps| !steps.is_empty())
        .unwrap_or_else(|| fallback_steps(original));
    Tip {
        full_description: Some(
            text_field(&fields, "fullDescription").unwrap_or_else(|| fallback_description(original)),
        ),
        steps: Some(steps),
        ..original.clone()
    }
}
