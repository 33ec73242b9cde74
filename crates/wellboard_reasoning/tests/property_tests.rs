//! Property-based tests for the response normalizer.
//!
//! Whatever the model sends back, the normalizer must not panic and must
//! hand the board 1..=5 usable tips.

use proptest::prelude::*;
use wellboard_core::{wellness_goals, Gender, GoalCategory, Profile};
use wellboard_reasoning::fallback::fallback_tips;
use wellboard_reasoning::{normalize_tip_detail, normalize_tips_list, MAX_TIPS};

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        13u32..=120,
        prop::sample::select(vec![Gender::Male, Gender::Female, Gender::Other, Gender::Undisclosed]),
        prop::sample::subsequence(wellness_goals().to_vec(), 1..=5),
    )
        .prop_map(|(age, gender, goals)| Profile::new(age, gender, goals).unwrap())
}

fn arb_item() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<i64>().prop_map(serde_json::Value::from),
        "\\PC{0,40}".prop_map(serde_json::Value::from),
        (
            proptest::option::of("\\PC{0,40}"),
            proptest::option::of("[a-z-]{0,20}"),
            proptest::option::of("[a-z]{0,8}"),
        )
            .prop_map(|(title, category, difficulty)| {
                serde_json::json!({ "title": title, "category": category, "difficulty": difficulty })
            }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// **Never panics** on arbitrary text, and always yields 1..=5 tips.
    #[test]
    fn tips_list_never_panics(raw in "\\PC{0,400}", profile in arb_profile()) {
        let tips = normalize_tips_list(&raw, &profile);
        prop_assert!(!tips.is_empty() && tips.len() <= MAX_TIPS);
    }

    /// Arbitrary JSON arrays produce well-formed tips.
    #[test]
    fn tips_list_fields_always_usable(
        items in prop::collection::vec(arb_item(), 0..12),
        profile in arb_profile(),
    ) {
        let raw = serde_json::to_string(&items).unwrap();
        let tips = normalize_tips_list(&raw, &profile);
        prop_assert!(!tips.is_empty() && tips.len() <= MAX_TIPS);
        for tip in &tips {
            prop_assert!(!tip.id.is_empty());
            prop_assert!(!tip.title.trim().is_empty());
            prop_assert!(GoalCategory::ALL.contains(&tip.category));
            prop_assert!(!tip.is_favorite);
            prop_assert_eq!(tip.generated_for.as_ref(), Some(&profile));
        }
    }

    /// Fallback selection is profile-relevant and stable across calls.
    #[test]
    fn fallback_is_deterministic(profile in arb_profile()) {
        let a: Vec<_> = fallback_tips(&profile).into_iter().map(|t| t.title).collect();
        let b: Vec<_> = fallback_tips(&profile).into_iter().map(|t| t.title).collect();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.len() <= MAX_TIPS);
    }

    /// Detail normalization never panics and always yields details.
    #[test]
    fn tip_detail_never_panics(raw in "\\PC{0,400}", profile in arb_profile()) {
        let original = fallback_tips(&profile).into_iter().next();
        if let Some(original) = original {
            let detailed = normalize_tip_detail(&raw, &original);
            prop_assert_eq!(&detailed.id, &original.id);
            prop_assert!(detailed.has_details());
        }
    }
}
