//! Counter types → candidate creatures

use std::collections::BTreeSet;

use counterdex_api::CanonicalName;

use super::resolver::CounterTypeSet;
use crate::error::{CounterError, Stage};
use crate::gateway::Gateway;

/// Deduplicated candidate names, target excluded
pub type CandidateSet = BTreeSet<CanonicalName>;

/// Collect every creature classified under any counter type, minus `exclude`.
///
/// Membership lookups are all-or-nothing: one failed type aborts the request
/// rather than silently shrinking the pool.
pub async fn build_candidates<G>(
    gateway: &G,
    counter_types: &CounterTypeSet,
    exclude: &CanonicalName,
) -> Result<CandidateSet, CounterError>
where
    G: Gateway + ?Sized,
{
    let mut candidates = CandidateSet::new();

    for kind in counter_types {
        let relation = gateway
            .type_relation(*kind)
            .await
            .map_err(|source| CounterError::Upstream {
                stage: Stage::TypeMembers,
                source,
            })?;

        tracing::debug!(
            counter_type = %kind,
            members = relation.members.len(),
            "Collected type members"
        );
        candidates.extend(relation.members);
    }

    candidates.remove(exclude);

    tracing::info!(
        pokemon = %exclude,
        candidates = candidates.len(),
        "Built candidate pool"
    );

    Ok(candidates)
}
