use proptest::prelude::*;
use wayfarer_core::models::BudgetTier;
use wayfarer_retrieval::{BudgetPartitioner, EmbeddingIndex, RefinementSelector};

fn arb_tier() -> impl Strategy<Value = BudgetTier> {
    prop_oneof![
        Just(BudgetTier::Low),
        Just(BudgetTier::Medium),
        Just(BudgetTier::High),
    ]
}

fn arb_vectors(dims: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, dims), 0..24)
}

fn city_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("city-{i}")).collect()
}

// ── Query ordering ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn query_sorted_and_clamped(
        vectors in arb_vectors(4),
        query_vec in prop::collection::vec(-1.0f32..1.0, 4),
        k in 0usize..32,
    ) {
        let n = vectors.len();
        let idx = EmbeddingIndex::from_vectors(city_names(n), vectors, 4).unwrap();
        let hits = idx.query_vector(&query_vec, k).unwrap();

        prop_assert_eq!(hits.len(), k.min(n));
        for w in hits.windows(2) {
            prop_assert!(
                w[0].distance < w[1].distance
                    || (w[0].distance == w[1].distance && w[0].index < w[1].index)
            );
        }
    }

    #[test]
    fn query_repeatable(
        vectors in arb_vectors(3),
        query_vec in prop::collection::vec(-1.0f32..1.0, 3),
    ) {
        let n = vectors.len();
        let idx = EmbeddingIndex::from_vectors(city_names(n), vectors, 3).unwrap();
        prop_assert_eq!(idx.query_vector(&query_vec, 8).unwrap(), idx.query_vector(&query_vec, 8).unwrap());
    }
}

// ── Budget slices ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn slices_stay_in_bounds(len in 0usize..16, tier in arb_tier()) {
        let r = BudgetPartitioner::new().range(tier, len);
        prop_assert!(r.start <= r.end);
        prop_assert!(r.end <= len);
        prop_assert!(r.len() <= 2);
    }
}

#[test]
fn full_window_ranges_disjoint() {
    let p = BudgetPartitioner::new();
    let low = p.range(BudgetTier::Low, 8);
    let medium = p.range(BudgetTier::Medium, 8);
    let high = p.range(BudgetTier::High, 8);
    assert!(low.end <= medium.start);
    assert!(medium.end <= high.start);
    assert_eq!(low.len() + medium.len() + high.len(), 6);
}

// ── Refinement ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shortlist_unique_and_contains_choice(
        ranked in prop::collection::vec("[a-e]{1,2}", 0..12),
        choice in "[a-e]{1,2}",
    ) {
        let shortlist = RefinementSelector::new(10, 3).shortlist(&ranked, &choice);

        prop_assert!(shortlist.contains(&choice));
        prop_assert_eq!(shortlist.last(), Some(&choice));
        let mut sorted = shortlist.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), shortlist.len());
        prop_assert!(!shortlist.is_empty() && shortlist.len() <= 4);
    }
}
