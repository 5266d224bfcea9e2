//! Offline matchup queries
//!
//! These work from the built-in type chart and never touch the catalog.

mod matchup;

pub use matchup::counter_types;
