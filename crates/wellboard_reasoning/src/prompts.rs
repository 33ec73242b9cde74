//! Prompt construction for tip lists and tip details.

use rand::distributions::Alphanumeric;
use rand::Rng;
use wellboard_core::{Profile, Tip};

/// Lowercase alphanumeric string of `len` random characters.
pub fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Time + random token embedded in list prompts so repeated requests are
/// never served from an upstream cache.
pub fn session_token() -> String {
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), random_suffix(9))
}

fn goal_names(profile: &Profile) -> String {
    profile
        .goals
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_tips_prompt(profile: &Profile, session: &str) -> String {
    let age_group = profile.age_group();
    let goals = goal_names(profile);
    let categories = profile
        .goal_categories()
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let gender = profile.gender.as_str();

    format!(
        r#"You are an experienced wellness coach. Write 5 fresh, distinct wellness recommendations for this person. Do not repeat generic advice.

Profile:
- Age: {age} ({age_group})
- Gender: {gender}
- Goals: {goals}
- Categories: {categories}
- Session: {session}

Rules:
1. Every recommendation must serve at least one of these goals: {goals}
2. No two recommendations may overlap
3. Each one must be specific, actionable and evidence-based
4. Fit the advice to a {gender} {age_group}, and keep it safe for that age group
5. Mix quick wins (easy) with bigger changes (medium or hard)

Answer with a JSON array only, no commentary:
[
  {{
    "title": "short title, at most 60 characters",
    "shortDescription": "two-sentence summary of the main benefit, at most 150 characters",
    "category": "fitness|nutrition|mental-health|sleep|stress-management|preventive-care",
    "icon": "a single fitting emoji",
    "difficulty": "easy|medium|hard",
    "estimatedTime": "e.g. '5 minutes' or '15-20 minutes'",
    "benefits": ["benefit", "benefit", "benefit"],
    "tags": ["keyword", "keyword"]
  }}
]"#,
        age = profile.age,
    )
}

pub fn build_detail_prompt(tip: &Tip, profile: &Profile) -> String {
    format!(
        r#"You are an experienced wellness coach. Expand the recommendation below into a full guide for this person.

Recommendation: "{title}"
Summary: "{summary}"
Category: {category}
Audience: {age}-year-old, {gender}
Goals: {goals}

Cover why it works, how to start, common obstacles and how to get past them, how to track progress, and easier or harder variations.

Answer with a JSON object only, no commentary:
{{
  "fullDescription": "three or four paragraphs explaining the reasoning and benefits for this person",
  "steps": ["Step 1: ...", "Step 2: ...", "Step N: ..."]
}}"#,
        title = tip.title,
        summary = tip.short_description,
        category = tip.category,
        age = profile.age,
        gender = profile.gender,
        goals = goal_names(profile),
    )
}
