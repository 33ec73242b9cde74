//! Deterministic fallback content used whenever the model's output cannot
//! be used.

use chrono::Utc;
use wellboard_core::{Difficulty, GoalCategory, Profile, Tip};

use crate::normalizer::{mint_tip_id, MAX_TIPS};

/// A hardcoded recommendation tagged with the goals it suits.
#[derive(Debug)]
pub struct FallbackEntry {
    pub title: &'static str,
    pub short_description: &'static str,
    pub category: GoalCategory,
    pub icon: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub benefits: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub relevant_goals: &'static [&'static str],
}

pub static FALLBACK_CATALOG: &[FallbackEntry] = &[
    // Fitness
    FallbackEntry {
        title: "Quick Morning Cardio",
        short_description: "Start your day with 10 minutes of energy-boosting movement.",
        category: GoalCategory::Fitness,
        icon: "🏃‍♂️",
        difficulty: Difficulty::Easy,
        estimated_time: "10 minutes",
        benefits: &["Improved cardiovascular health", "Increased energy", "Better mood"],
        tags: &["cardio", "morning", "energy"],
        relevant_goals: &["cardio-fitness", "energy-boost", "weight-management"],
    },
    FallbackEntry {
        title: "Bodyweight Strength Training",
        short_description: "Build muscle with simple exercises you can do anywhere.",
        category: GoalCategory::Fitness,
        icon: "💪",
        difficulty: Difficulty::Medium,
        estimated_time: "20 minutes",
        benefits: &["Increased muscle mass", "Better metabolism", "Stronger bones"],
        tags: &["strength", "bodyweight", "muscle"],
        relevant_goals: &["muscle-building", "weight-management"],
    },
    FallbackEntry {
        title: "Daily Flexibility Routine",
        short_description: "Improve mobility and reduce stiffness with gentle stretches.",
        category: GoalCategory::Fitness,
        icon: "🤸",
        difficulty: Difficulty::Easy,
        estimated_time: "15 minutes",
        benefits: &["Improved flexibility", "Reduced stiffness", "Better posture"],
        tags: &["flexibility", "stretching", "mobility"],
        relevant_goals: &["flexibility"],
    },
    // Nutrition
    FallbackEntry {
        title: "Balanced Plate Method",
        short_description: "Create nutritious meals using the simple plate division rule.",
        category: GoalCategory::Nutrition,
        icon: "🥗",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutes planning",
        benefits: &["Better nutrition", "Portion control", "Sustained energy"],
        tags: &["meal-planning", "nutrition", "balance"],
        relevant_goals: &["healthy-eating", "weight-management"],
    },
    FallbackEntry {
        title: "Weekly Meal Prep",
        short_description: "Save time and eat healthier with organized meal preparation.",
        category: GoalCategory::Nutrition,
        icon: "📝",
        difficulty: Difficulty::Medium,
        estimated_time: "2 hours weekly",
        benefits: &["Time savings", "Better nutrition", "Cost savings"],
        tags: &["meal-prep", "planning", "organization"],
        relevant_goals: &["meal-planning", "healthy-eating"],
    },
    FallbackEntry {
        title: "Smart Hydration System",
        short_description: "Track and optimize your daily water intake easily.",
        category: GoalCategory::Nutrition,
        icon: "💧",
        difficulty: Difficulty::Easy,
        estimated_time: "2 minutes setup",
        benefits: &["Better hydration", "Improved energy", "Clearer skin"],
        tags: &["hydration", "water", "tracking"],
        relevant_goals: &["hydration"],
    },
    FallbackEntry {
        title: "Gut Health Support",
        short_description: "Improve digestion with probiotic-rich foods and fiber.",
        category: GoalCategory::Nutrition,
        icon: "🌿",
        difficulty: Difficulty::Medium,
        estimated_time: "10 minutes daily",
        benefits: &["Better digestion", "Improved immunity", "Enhanced nutrient absorption"],
        tags: &["gut-health", "probiotics", "digestion"],
        relevant_goals: &["digestive-health"],
    },
    // Mental health
    FallbackEntry {
        title: "Mindfulness Moments",
        short_description: "Practice present-moment awareness throughout your day.",
        category: GoalCategory::MentalHealth,
        icon: "🧠",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutes",
        benefits: &["Reduced stress", "Better focus", "Emotional balance"],
        tags: &["mindfulness", "meditation", "awareness"],
        relevant_goals: &["mindfulness", "stress-reduction"],
    },
    FallbackEntry {
        title: "Anxiety Relief Techniques",
        short_description: "Learn practical strategies to manage anxious thoughts.",
        category: GoalCategory::MentalHealth,
        icon: "🌱",
        difficulty: Difficulty::Medium,
        estimated_time: "10-15 minutes",
        benefits: &["Reduced anxiety", "Better emotional control", "Improved confidence"],
        tags: &["anxiety", "coping", "mental-health"],
        relevant_goals: &["anxiety-management", "stress-reduction"],
    },
    // Sleep
    FallbackEntry {
        title: "Optimal Sleep Routine",
        short_description: "Create a consistent bedtime routine for better rest.",
        category: GoalCategory::Sleep,
        icon: "😴",
        difficulty: Difficulty::Medium,
        estimated_time: "30 minutes prep",
        benefits: &["Better sleep quality", "More energy", "Improved mood"],
        tags: &["sleep", "routine", "rest"],
        relevant_goals: &["better-sleep"],
    },
    // Stress management
    FallbackEntry {
        title: "Work-Life Boundaries",
        short_description: "Create healthy separation between work and personal time.",
        category: GoalCategory::StressManagement,
        icon: "⚖️",
        difficulty: Difficulty::Medium,
        estimated_time: "15 minutes setup",
        benefits: &["Reduced stress", "Better relationships", "Improved productivity"],
        tags: &["balance", "boundaries", "work-life"],
        relevant_goals: &["work-life-balance", "stress-reduction"],
    },
    FallbackEntry {
        title: "Digital Wellness Break",
        short_description: "Reduce screen time stress with mindful technology use.",
        category: GoalCategory::StressManagement,
        icon: "📱",
        difficulty: Difficulty::Easy,
        estimated_time: "10 minutes",
        benefits: &["Reduced eye strain", "Better focus", "Improved sleep"],
        tags: &["digital-detox", "technology", "mindfulness"],
        relevant_goals: &["stress-reduction", "better-sleep"],
    },
    // Preventive care
    FallbackEntry {
        title: "Immune System Boost",
        short_description: "Strengthen your natural defenses with simple daily habits.",
        category: GoalCategory::PreventiveCare,
        icon: "🛡️",
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutes daily",
        benefits: &["Stronger immunity", "Fewer illnesses", "Faster recovery"],
        tags: &["immunity", "prevention", "health"],
        relevant_goals: &["immune-system"],
    },
];

/// Pick up to [`MAX_TIPS`] catalog entries for `profile`: entries tagged with
/// one of its goals first, then entries sharing one of its goal categories.
/// An entry matched by both passes appears twice.
pub fn select_fallback(profile: &Profile) -> Vec<&'static FallbackEntry> {
    let goal_ids = profile.goal_ids();
    let categories = profile.goal_categories();

    let relevant = FALLBACK_CATALOG
        .iter()
        .filter(|entry| entry.relevant_goals.iter().any(|g| goal_ids.contains(g)));
    let general = FALLBACK_CATALOG
        .iter()
        .filter(|entry| categories.contains(&entry.category));

    relevant.chain(general).take(MAX_TIPS).collect()
}

/// Fallback tips stamped with fresh ids, the current time and `profile`.
pub fn fallback_tips(profile: &Profile) -> Vec<Tip> {
    let now = Utc::now();
    select_fallback(profile)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Tip {
            id: mint_tip_id("fallback-tip", index),
            title: entry.title.to_string(),
            short_description: entry.short_description.to_string(),
            full_description: None,
            category: entry.category,
            icon: entry.icon.to_string(),
            difficulty: entry.difficulty,
            estimated_time: entry.estimated_time.to_string(),
            steps: None,
            benefits: entry.benefits.iter().map(|s| s.to_string()).collect(),
            tags: entry.tags.iter().map(|s| s.to_string()).collect(),
            is_favorite: false,
            created_at: now,
            generated_for: Some(profile.clone()),
        })
        .collect()
}

pub fn fallback_description(tip: &Tip) -> String {
    format!(
        "{title} is a practical wellness habit that can make a real difference to your health and \
         well-being. It is matched to the goals you chose and is meant to grow into a routine you \
         can keep. Practiced regularly, it supports better physical health, a clearer mind and a \
         better overall quality of life. The benefits build on each other over time, so every \
         repetition is an investment in your long-term wellness.",
        title = tip.title
    )
}

pub fn fallback_steps(tip: &Tip) -> Vec<String> {
    vec![
        format!(
            "Start by thinking through why {} matters for your wellness goals",
            tip.title.to_lowercase()
        ),
        "Block out a regular slot in your schedule for this practice".to_string(),
        "Begin with small, manageable actions that fit your daily routine".to_string(),
        "Track your progress and notice the small wins".to_string(),
        "Increase the intensity or frequency once the habit feels easy".to_string(),
        "Adjust based on how your body and mind respond".to_string(),
        "Keep it up for at least 21 days so the habit sticks".to_string(),
        "Ask friends, family or a community for support when you need it".to_string(),
    ]
}

/// `original` with the templated description and steps attached.
pub fn fallback_detail(original: &Tip) -> Tip {
    Tip {
        full_description: Some(fallback_description(original)),
        steps: Some(fallback_steps(original)),
        ..original.clone()
    }
}
