use proptest::prelude::*;
use wayfarer_core::models::BudgetTier;
use wayfarer_planner::input::{parse_duration, parse_interests};

// ── Budget parsing ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn budget_ignores_case_and_padding(
        word in prop_oneof![Just("low"), Just("medium"), Just("high")],
        upper in prop::collection::vec(any::<bool>(), 6),
        pad in " {0,3}",
    ) {
        let mixed: String = word
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let input = format!("{pad}{mixed}{pad}");
        let tier: BudgetTier = input.parse().unwrap();
        prop_assert_eq!(tier.as_str(), word);
    }
}

// ── Duration ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn positive_durations_accepted(days in 1u32..10_000) {
        prop_assert_eq!(parse_duration(&days.to_string()), Ok(days));
    }

    #[test]
    fn non_numeric_durations_rejected(text in "[a-z ]{1,8}") {
        prop_assert!(parse_duration(&text).is_err());
    }
}

// ── Interests ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn interests_unique_lowercase_nonblank(
        tags in prop::collection::vec("[A-Za-z]{0,6}", 1..8),
    ) {
        let input = tags.join(" , ");
        match parse_interests(&input) {
            Ok(parsed) => {
                let mut unique = parsed.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), parsed.len());
                for tag in &parsed {
                    prop_assert!(!tag.is_empty());
                    prop_assert_eq!(tag, &tag.to_lowercase());
                }
            }
            Err(_) => {
                prop_assert!(tags.iter().all(|t| t.is_empty()));
            }
        }
    }
}
