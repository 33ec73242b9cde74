//! Static catalog of wellness goals the user can pick from.

use std::sync::LazyLock;

use crate::model::{Goal, GoalCategory};

const GOALS: &[(&str, &str, GoalCategory, &str, &str)] = &[
    ("weight-management", "Weight Management", GoalCategory::Fitness, "⚖️",
        "Achieve and maintain a healthy weight through balanced lifestyle"),
    ("muscle-building", "Build Muscle", GoalCategory::Fitness, "💪",
        "Increase muscle mass and strength through targeted exercise"),
    ("cardio-fitness", "Improve Cardio", GoalCategory::Fitness, "❤️",
        "Enhance cardiovascular health and endurance"),
    ("flexibility", "Increase Flexibility", GoalCategory::Fitness, "🤸",
        "Improve range of motion and reduce stiffness"),
    ("healthy-eating", "Eat Healthier", GoalCategory::Nutrition, "🥗",
        "Develop nutritious eating habits and meal planning"),
    ("meal-planning", "Meal Planning", GoalCategory::Nutrition, "📝",
        "Organize meals for better nutrition and time management"),
    ("hydration", "Stay Hydrated", GoalCategory::Nutrition, "💧",
        "Maintain proper daily water intake"),
    ("stress-reduction", "Reduce Stress", GoalCategory::StressManagement, "🧘",
        "Learn techniques to manage and reduce daily stress"),
    ("anxiety-management", "Manage Anxiety", GoalCategory::MentalHealth, "🌱",
        "Develop coping strategies for anxiety and worry"),
    ("better-sleep", "Better Sleep", GoalCategory::Sleep, "😴",
        "Improve sleep quality and establish healthy sleep patterns"),
    ("energy-boost", "Increase Energy", GoalCategory::Fitness, "⚡",
        "Boost daily energy levels naturally"),
    ("mindfulness", "Practice Mindfulness", GoalCategory::MentalHealth, "🧠",
        "Develop present-moment awareness and mental clarity"),
    ("work-life-balance", "Work-Life Balance", GoalCategory::StressManagement, "⚖️",
        "Create healthy boundaries between work and personal life"),
    ("immune-system", "Boost Immunity", GoalCategory::PreventiveCare, "🛡️",
        "Strengthen immune system through lifestyle choices"),
    ("digestive-health", "Digestive Health", GoalCategory::Nutrition, "🌿",
        "Improve gut health and digestion"),
];

static CATALOG: LazyLock<Vec<Goal>> = LazyLock::new(|| {
    GOALS
        .iter()
        .map(|(id, name, category, icon, description)| Goal {
            id: id.to_string(),
            name: name.to_string(),
            category: *category,
            icon: icon.to_string(),
            description: description.to_string(),
        })
        .collect()
});

/// All selectable goals in display order.
pub fn wellness_goals() -> &'static [Goal] {
    &CATALOG
}

pub fn find_goal(id: &str) -> Option<Goal> {
    CATALOG.iter().find(|g| g.id == id).cloned()
}
