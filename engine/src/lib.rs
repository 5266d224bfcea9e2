//! Counter recommendations for catalog Pokemon.
//!
//! Given a target creature, this crate works out which creatures are favored
//! to beat it: the types that deal double damage to any of its types, every
//! creature classified under those types, and a ranking of those creatures
//! by offensive base stats (attack + special attack + speed).
//!
//! # Overview
//!
//! ```text
//! counterdex-api (payloads + canonical names)
//!        │
//!        ▼
//! counterdex-engine (type chart + pipeline) ← THIS CRATE
//!        │
//!        ▼
//! counterdex-client (HTTP gateway + lookups)
//! ```
//!
//! # Main Types
//!
//! - [`Gateway`] - the upstream seam; implemented over HTTP by `counterdex-client`
//!   and in memory by [`MemoryGateway`]
//! - [`rank_counters`] - the whole pipeline in one call
//! - [`CounterOptions`] - top N, worker pool width, per-lookup timeout
//! - [`RankedResult`] / [`StatProfile`] - the answer
//! - [`CounterError`] - not found vs. upstream failure
//! - [`Type`] - the 18 types with their effectiveness chart
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use counterdex_engine::{CounterOptions, rank_counters};
//!
//! let ranked = rank_counters(Arc::new(gateway), "charizard", &CounterOptions::default()).await?;
//! for profile in &ranked {
//!     println!("{} {}", profile.name().display_name(), profile.total());
//! }
//! ```

pub mod error;
pub mod gateway;
pub mod pipeline;
pub mod query;
pub mod types;

pub use error::{CounterError, GatewayError, Stage};
pub use gateway::{Gateway, GatewayCall, MemoryGateway};
pub use pipeline::{
    CandidateSet, CounterOptions, CounterTypeSet, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_MAX_WORKERS,
    DEFAULT_TOP_N, build_candidates, fetch_profiles, rank, rank_counters, resolve_counter_types,
};
pub use types::{RankedResult, SpeciesTypes, StatProfile, TYPE_CHART, Type, TypeRelation};

pub use counterdex_api::CanonicalName;
