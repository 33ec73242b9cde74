//! Property-based tests for wellboard_core.
//!
//! Favorites bookkeeping must stay consistent for any board and any
//! sequence of toggles, not just the hand-picked cases in the unit tests.

use chrono::Utc;
use proptest::prelude::*;
use std::sync::Arc;
use wellboard_core::{
    wellness_goals, Difficulty, Gender, GoalCategory, NullStore, Profile, Tip, Workflow,
    WorkflowStep,
};

// ============================================================================
// Strategies
// ============================================================================

/// A valid profile: 1..=5 distinct catalog goals, any supported age.
fn arb_profile() -> impl Strategy<Value = Profile> {
    let catalog = wellness_goals().to_vec();
    (
        13u32..=120,
        prop::sample::subsequence(catalog, 1..=5),
        prop::sample::select(vec![Gender::Male, Gender::Female, Gender::Other, Gender::Undisclosed]),
    )
        .prop_map(|(age, goals, gender)| Profile::new(age, gender, goals).unwrap())
}

fn board_tip(index: usize, profile: &Profile) -> Tip {
    Tip {
        id: format!("tip-{index}"),
        title: format!("Tip {index}"),
        short_description: "Short".into(),
        full_description: None,
        category: GoalCategory::ALL[index % GoalCategory::ALL.len()],
        icon: "💪".into(),
        difficulty: Difficulty::Easy,
        estimated_time: "5 minutes".into(),
        steps: None,
        benefits: vec![],
        tags: vec![],
        is_favorite: false,
        created_at: Utc::now(),
        generated_for: Some(profile.clone()),
    }
}

fn displaying(profile: &Profile, count: usize) -> Workflow {
    let mut wf = Workflow::new(Arc::new(NullStore));
    let ticket = wf.submit_profile(profile.clone()).unwrap().unwrap();
    let tips = (0..count).map(|i| board_tip(i, profile)).collect();
    assert!(wf.tips_generated(ticket.id, tips));
    wf
}

proptest! {
    /// Toggling any tip twice restores both collections.
    #[test]
    fn toggle_twice_restores_collections(
        profile in arb_profile(),
        count in 1usize..=5,
        pick in any::<prop::sample::Index>(),
        pre in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let mut wf = displaying(&profile, count);
        for idx in pre {
            let tip = wf.state().current_tips[idx.index(count)].clone();
            wf.toggle_favorite(&tip);
        }
        let before = wf.state().clone();

        let i = pick.index(count);
        let tip = wf.state().current_tips[i].clone();
        wf.toggle_favorite(&tip);
        let tip = wf.state().current_tips[i].clone();
        wf.toggle_favorite(&tip);

        let ids = |tips: &[Tip]| tips.iter().map(|t| (t.id.clone(), t.is_favorite)).collect::<Vec<_>>();
        prop_assert_eq!(ids(&wf.state().current_tips), ids(&before.current_tips));
        let mut after_favs = ids(&wf.state().favorite_tips);
        let mut before_favs = ids(&before.favorite_tips);
        after_favs.sort();
        before_favs.sort();
        prop_assert_eq!(after_favs, before_favs);
    }

    /// A tip is flagged on the board exactly when it is in the favorites list.
    #[test]
    fn favorite_flags_mirror_favorites_list(
        profile in arb_profile(),
        count in 1usize..=5,
        toggles in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let mut wf = displaying(&profile, count);
        for idx in toggles {
            let tip = wf.state().current_tips[idx.index(count)].clone();
            wf.toggle_favorite(&tip);
        }
        let state = wf.state();
        for tip in &state.current_tips {
            let listed = state.favorite_tips.iter().any(|f| f.id == tip.id);
            prop_assert_eq!(tip.is_favorite, listed);
        }
        prop_assert!(state.favorite_tips.iter().all(|f| f.is_favorite));
        prop_assert_eq!(state.current_step, WorkflowStep::TipsDisplay);
    }
}
