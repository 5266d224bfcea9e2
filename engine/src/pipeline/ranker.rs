//! Stat profiles → ranked top N

use std::cmp::Ordering;

use crate::types::{RankedResult, StatProfile};

/// Highest total score first; equal totals fall back to canonical name
/// ascending, so the order never depends on which lookup finished first.
pub fn rank(mut profiles: Vec<StatProfile>, top_n: usize) -> RankedResult {
    profiles.sort_by(by_strength);
    profiles.truncate(top_n);
    RankedResult::new(profiles)
}

fn by_strength(a: &StatProfile, b: &StatProfile) -> Ordering {
    b.total()
        .cmp(&a.total())
        .then_with(|| a.name().cmp(b.name()))
}
