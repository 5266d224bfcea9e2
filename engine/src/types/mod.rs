//! Domain types for counter recommendations

mod pokemon_type;
mod species;
mod stats;

pub use pokemon_type::{TYPE_CHART, Type};
pub use species::{SpeciesTypes, TypeRelation};
pub use stats::{RankedResult, StatProfile};
