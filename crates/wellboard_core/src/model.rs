//! Wellness domain model: profiles, goals and recommendation tips.
//!
//! Pure data plus the invariants a profile must satisfy before the
//! workflow accepts it. Timestamps are `chrono::DateTime<Utc>` so they
//! round-trip through persisted JSON as real time values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::ValidationError;

pub const MIN_AGE: u32 = 13;
pub const MAX_AGE: u32 = 120;
pub const MAX_GOALS: usize = 5;

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    Fitness,
    Nutrition,
    MentalHealth,
    Sleep,
    StressManagement,
    PreventiveCare,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 6] = [
        GoalCategory::Fitness,
        GoalCategory::Nutrition,
        GoalCategory::MentalHealth,
        GoalCategory::Sleep,
        GoalCategory::StressManagement,
        GoalCategory::PreventiveCare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Fitness => "fitness",
            GoalCategory::Nutrition => "nutrition",
            GoalCategory::MentalHealth => "mental-health",
            GoalCategory::Sleep => "sleep",
            GoalCategory::StressManagement => "stress-management",
            GoalCategory::PreventiveCare => "preventive-care",
        }
    }

    /// Strict parse: only the six known category names are accepted.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "prefer-not-to-say", alias = "undisclosed")]
    Undisclosed,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Undisclosed => "prefer-not-to-say",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "prefer-not-to-say" | "undisclosed" => Some(Gender::Undisclosed),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

// ============================================================================
// Goal
// ============================================================================

/// Catalog entry describing something the user wants to work on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub category: GoalCategory,
    pub icon: String,
    pub description: String,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub goals: Vec<Goal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a validated profile stamped with the current time.
    pub fn new(age: u32, gender: Gender, goals: Vec<Goal>) -> Result<Self, ValidationError> {
        let now = Utc::now();
        let profile = Self {
            age,
            gender,
            goals,
            created_at: now,
            updated_at: now,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        if self.goals.is_empty() {
            return Err(ValidationError::NoGoals);
        }
        if self.goals.len() > MAX_GOALS {
            return Err(ValidationError::TooManyGoals(self.goals.len()));
        }
        let mut seen = HashSet::new();
        for goal in &self.goals {
            if !seen.insert(goal.id.as_str()) {
                return Err(ValidationError::DuplicateGoal(goal.id.clone()));
            }
        }
        Ok(())
    }

    /// Copy of this profile with new attributes, keeping `created_at`.
    pub fn revised(&self, age: u32, gender: Gender, goals: Vec<Goal>) -> Result<Self, ValidationError> {
        let profile = Self {
            age,
            gender,
            goals,
            created_at: self.created_at,
            updated_at: Utc::now(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn goal_ids(&self) -> Vec<&str> {
        self.goals.iter().map(|g| g.id.as_str()).collect()
    }

    /// Distinct goal categories in first-seen order.
    pub fn goal_categories(&self) -> Vec<GoalCategory> {
        let mut categories = Vec::new();
        for goal in &self.goals {
            if !categories.contains(&goal.category) {
                categories.push(goal.category);
            }
        }
        categories
    }

    /// Sorted, comma-joined goal ids. Two profiles target the same goals
    /// exactly when their signatures are equal.
    pub fn goal_signature(&self) -> String {
        let mut ids = self.goal_ids();
        ids.sort_unstable();
        ids.join(",")
    }

    pub fn age_group(&self) -> &'static str {
        match self.age {
            0..=17 => "teenager",
            18..=24 => "young adult",
            25..=34 => "adult",
            35..=49 => "middle-aged adult",
            50..=64 => "older adult",
            _ => "senior",
        }
    }
}

// ============================================================================
// Tip
// ============================================================================

/// A single recommendation card.
///
/// The same tip may live in both the current board and the favorites list;
/// identity is the `id`, never object identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub category: GoalCategory,
    pub icon: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        rename = "generatedFor",
        alias = "aiGeneratedFor",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_for: Option<Profile>,
}

impl Tip {
    /// Whether the detail enrichment fields are already populated.
    pub fn has_details(&self) -> bool {
        self.full_description.is_some() && self.steps.is_some()
    }

    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }
}
