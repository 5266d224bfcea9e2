//! The counter-recommendation pipeline
//!
//! ```text
//! target name
//!     │  resolve_counter_types   species → its types → double_damage_from (fail-fast)
//!     ▼
//! CounterTypeSet
//!     │  build_candidates        members of each counter type, target removed (fail-fast)
//!     ▼
//! CandidateSet
//!     │  fetch_profiles          bounded worker pool, per-candidate failures dropped
//!     ▼
//! Vec<StatProfile>
//!     │  rank                    total desc, name asc, truncate
//!     ▼
//! RankedResult
//! ```

mod candidates;
mod fetcher;
mod ranker;
mod resolver;

use std::sync::Arc;
use std::time::Duration;

use counterdex_api::CanonicalName;
use tracing::Instrument;

use crate::error::CounterError;
use crate::gateway::Gateway;
use crate::types::RankedResult;

pub use candidates::{CandidateSet, build_candidates};
pub use fetcher::fetch_profiles;
pub use ranker::rank;
pub use resolver::{CounterTypeSet, resolve_counter_types};

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MAX_WORKERS: usize = 20;
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Knobs for a single counter request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterOptions {
    /// Maximum number of ranked entries returned
    pub top_n: usize,

    /// Width of the stat-lookup worker pool
    pub max_workers: usize,

    /// Per-candidate stat lookup timeout
    pub timeout: Duration,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_workers: DEFAULT_MAX_WORKERS,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

impl CounterOptions {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Rank the creatures best placed to counter `target`.
///
/// Runs the whole pipeline inside a `rank_counters` span carrying the
/// target's canonical name; worker tasks inherit that span, so every log
/// line of one request can be correlated. An empty result means the target
/// exists but no counter could be scored.
pub async fn rank_counters<G>(
    gateway: Arc<G>,
    target: &str,
    options: &CounterOptions,
) -> Result<RankedResult, CounterError>
where
    G: Gateway + ?Sized + 'static,
{
    let target = CanonicalName::new(target)?;
    let span = tracing::info_span!("rank_counters", pokemon = %target);

    async move {
        tracing::info!(
            top_n = options.top_n,
            max_workers = options.max_workers,
            "Ranking counters"
        );

        let (species, counter_types) = resolve_counter_types(gateway.as_ref(), &target).await?;
        let candidates = build_candidates(gateway.as_ref(), &counter_types, &species.name).await?;
        let profiles =
            fetch_profiles(gateway, candidates, options.max_workers, options.timeout).await;
        let ranked = rank(profiles, options.top_n);

        tracing::info!(
            counters = ?ranked.names(),
            "Ranked counters"
        );

        Ok::<_, CounterError>(ranked)
    }
    .instrument(span)
    .await
}
