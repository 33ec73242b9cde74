//! Plain-text views of `AppState`, one per workflow step.

use std::fmt::Write;
use wellboard_core::{wellness_goals, AppState, Profile, Tip, WorkflowStep};

/// Tips that `show <n>` and `fav <n>` index into for the current step.
pub fn visible_tips(state: &AppState) -> &[Tip] {
    match state.current_step {
        WorkflowStep::Favorites => &state.favorite_tips,
        _ => &state.current_tips,
    }
}

pub fn render_state(state: &AppState) -> String {
    match state.current_step {
        WorkflowStep::ProfileSetup => render_profile_setup(state),
        WorkflowStep::TipsGeneration => render_generation(state),
        WorkflowStep::TipsDisplay => render_board(state),
        WorkflowStep::TipDetails => match &state.selected_tip {
            Some(tip) => render_tip_detail(tip),
            None => render_board(state),
        },
        WorkflowStep::Favorites => render_favorites(state),
    }
}

fn render_profile_setup(state: &AppState) -> String {
    let mut out = String::from("Welcome! Tell us about yourself to get personalized wellness tips.\n");
    out.push_str("  profile <age> <gender> <goal,goal,...>   (gender: male, female, other, prefer-not-to-say)\n");
    out.push_str("  Type `goals` to see the available goals.");
    if !state.favorite_tips.is_empty() {
        let _ = write!(out, "\nYou have {} saved favorites (`favorites`).", state.favorite_tips.len());
    }
    out
}

fn render_generation(state: &AppState) -> String {
    match &state.error {
        Some(error) => format!("Could not generate tips: {error}\nType `retry` to try again."),
        None => "Generating your personalized tips...".to_string(),
    }
}

fn profile_line(profile: &Profile) -> String {
    let goals: Vec<_> = profile.goals.iter().map(|g| format!("{} {}", g.icon, g.name)).collect();
    format!("{} year old {}, goals: {}", profile.age, profile.gender, goals.join(", "))
}

pub fn render_tip_card(index: usize, tip: &Tip) -> String {
    let star = if tip.is_favorite { " ★" } else { "" };
    format!(
        "{}. {} {}{}  [{} · {} · {}]\n   {}",
        index,
        tip.icon,
        tip.title,
        star,
        tip.category,
        tip.difficulty.as_str(),
        tip.estimated_time,
        tip.short_description
    )
}

fn render_board(state: &AppState) -> String {
    let mut out = String::new();
    if let Some(profile) = &state.user_profile {
        let _ = writeln!(out, "Your wellness board ({})", profile_line(profile));
    }
    for (i, tip) in state.current_tips.iter().enumerate() {
        let _ = writeln!(out, "{}", render_tip_card(i + 1, tip));
    }
    out.push_str("`show <n>` to open a tip, `fav <n>` to save it, `regenerate` for new tips.");
    out
}

fn render_favorites(state: &AppState) -> String {
    if state.favorite_tips.is_empty() {
        return "No favorites yet. Use `fav <n>` on the board to save a tip.".to_string();
    }
    let mut out = format!("Favorites ({})\n", state.favorite_tips.len());
    for (i, tip) in state.favorite_tips.iter().enumerate() {
        let _ = writeln!(out, "{}", render_tip_card(i + 1, tip));
    }
    out.push_str("`show <n>` to open, `fav <n>` to remove, `board` to go back.");
    out
}

pub fn render_tip_detail(tip: &Tip) -> String {
    let mut out = String::new();
    let star = if tip.is_favorite { " ★" } else { "" };
    let _ = writeln!(out, "{} {}{}", tip.icon, tip.title, star);
    let _ = writeln!(
        out,
        "{} · {} · {}",
        tip.category,
        tip.difficulty.as_str(),
        tip.estimated_time
    );
    let _ = writeln!(out, "\n{}", tip.short_description);

    match &tip.full_description {
        Some(description) => {
            let _ = writeln!(out, "\n{description}");
        }
        None => out.push_str("\nType `details` to load the full guide.\n"),
    }
    if let Some(steps) = &tip.steps {
        out.push_str("\nHow to do it:\n");
        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }
    if !tip.benefits.is_empty() {
        let _ = writeln!(out, "\nBenefits: {}", tip.benefits.join(", "));
    }
    if !tip.tags.is_empty() {
        let tags: Vec<_> = tip.tags.iter().map(|t| format!("#{t}")).collect();
        let _ = writeln!(out, "Tags: {}", tags.join(" "));
    }
    out.push_str("`back` to return to the board.");
    out
}

pub fn render_goals() -> String {
    let mut out = String::from("Available goals:\n");
    for goal in wellness_goals() {
        let _ = writeln!(
            out,
            "  {} {:<20} {:<18} {}",
            goal.icon, goal.id, goal.category.as_str(), goal.description
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wellboard_core::{find_goal, Difficulty, Gender, GoalCategory};

    fn tip(title: &str) -> Tip {
        Tip {
            id: format!("tip-{title}"),
            title: title.into(),
            short_description: "Short summary.".into(),
            full_description: None,
            category: GoalCategory::Sleep,
            icon: "😴".into(),
            difficulty: Difficulty::Medium,
            estimated_time: "30 minutes".into(),
            steps: None,
            benefits: vec!["Better rest".into()],
            tags: vec!["sleep".into()],
            is_favorite: false,
            created_at: Utc::now(),
            generated_for: None,
        }
    }

    #[test]
    fn test_card_format() {
        let mut t = tip("Wind Down");
        assert_eq!(
            render_tip_card(1, &t),
            "1. 😴 Wind Down  [sleep · medium · 30 minutes]\n   Short summary."
        );
        t.is_favorite = true;
        assert!(render_tip_card(1, &t).contains("Wind Down ★"));
    }

    #[test]
    fn test_board_lists_tips_and_profile() {
        let profile = Profile::new(30, Gender::Female, vec![find_goal("better-sleep").unwrap()]).unwrap();
        let state = AppState {
            user_profile: Some(profile),
            current_tips: vec![tip("A"), tip("B")],
            current_step: WorkflowStep::TipsDisplay,
            ..AppState::default()
        };
        let view = render_state(&state);
        assert!(view.contains("30 year old female"));
        assert!(view.contains("1. 😴 A"));
        assert!(view.contains("2. 😴 B"));
    }

    #[test]
    fn test_generation_error_offers_retry() {
        let state = AppState {
            current_step: WorkflowStep::TipsGeneration,
            error: Some("boom".into()),
            ..AppState::default()
        };
        let view = render_state(&state);
        assert!(view.contains("boom"));
        assert!(view.contains("retry"));
    }

    #[test]
    fn test_detail_view_shows_steps() {
        let mut t = tip("Wind Down");
        assert!(render_tip_detail(&t).contains("`details`"));
        t.full_description = Some("Long form.".into());
        t.steps = Some(vec!["Dim the lights".into(), "Read".into()]);
        let view = render_tip_detail(&t);
        assert!(view.contains("Long form."));
        assert!(view.contains("  2. Read"));
        assert!(!view.contains("`details`"));
    }

    #[test]
    fn test_visible_tips_follow_step() {
        let mut state = AppState {
            current_tips: vec![tip("Board")],
            favorite_tips: vec![tip("Fav")],
            ..AppState::default()
        };
        assert_eq!(visible_tips(&state)[0].title, "Board");
        state.current_step = WorkflowStep::Favorites;
        assert_eq!(visible_tips(&state)[0].title, "Fav");
    }

    #[test]
    fn test_goals_listing() {
        let view = render_goals();
        assert!(view.contains("weight-management"));
        assert!(view.contains("digestive-health"));
    }
}
