//! Budget-tier slicing of a ranked neighbour list.
//!
//! Two items per tier: `low` takes ranks `[0,2)`, `medium` `[2,4)`, `high`
//! the last two. Over a full window of eight the ranges are disjoint.
//! Shorter lists clamp every range to the list end.

use std::ops::Range;

use wayfarer_core::constants::{BUDGET_MEDIUM_START, BUDGET_SLICE_WIDTH};
use wayfarer_core::models::BudgetTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPartitioner {
    width: usize,
    medium_start: usize,
}

impl Default for BudgetPartitioner {
    fn default() -> Self {
        Self {
            width: BUDGET_SLICE_WIDTH,
            medium_start: BUDGET_MEDIUM_START,
        }
    }
}

impl BudgetPartitioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank positions selected for `tier` in a list of `len` items.
    pub fn range(&self, tier: BudgetTier, len: usize) -> Range<usize> {
        match tier {
            BudgetTier::Low => 0..self.width.min(len),
            BudgetTier::Medium => {
                let start = self.medium_start.min(len);
                start..(self.medium_start + self.width).min(len)
            }
            BudgetTier::High => len.saturating_sub(self.width)..len,
        }
    }

    pub fn partition<'a, T>(&self, ranked: &'a [T], tier: BudgetTier) -> &'a [T] {
        &ranked[self.range(tier, ranked.len())]
    }
}
