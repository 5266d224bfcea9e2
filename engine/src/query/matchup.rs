//! Type matchup helpers answered from the built-in chart

use std::collections::BTreeSet;

use crate::types::Type;

/// Union of every type that deals double damage to any one of the defender's
/// types, judged per type rather than against the combined multiplier.
///
/// This is the chart-side counterpart of the counter types the pipeline
/// resolves from the catalog.
pub fn counter_types(defender_types: &[Type]) -> BTreeSet<Type> {
    defender_types
        .iter()
        .flat_map(|t| t.double_damage_from())
        .collect()
}
