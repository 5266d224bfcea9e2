//! Candidates → stat profiles, fetched by a bounded worker pool

use std::sync::Arc;
use std::time::{Duration, Instant};

use counterdex_api::{CanonicalName, Resource};
use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::Instrument;

use super::candidates::CandidateSet;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::types::StatProfile;

/// Fetch a stat profile for every candidate, at most `max_workers` at a time.
///
/// Each lookup is bounded by `timeout`. A lookup that fails or times out only
/// drops its own candidate; the batch always completes and may come back
/// empty. Returns once every spawned lookup has finished, in no particular
/// order.
///
/// Lookups run as detached tasks: dropping the returned future does not
/// cancel them, they run to their own timeout and their results are
/// discarded. `max_workers` of zero is treated as one.
pub async fn fetch_profiles<G>(
    gateway: Arc<G>,
    candidates: CandidateSet,
    max_workers: usize,
    timeout: Duration,
) -> Vec<StatProfile>
where
    G: Gateway + ?Sized + 'static,
{
    let dispatched = candidates.len();
    let permits = Arc::new(Semaphore::new(max_workers.max(1)));
    let span = tracing::Span::current();

    let tasks: Vec<_> = candidates
        .into_iter()
        .map(|name| {
            let gateway = Arc::clone(&gateway);
            let permits = Arc::clone(&permits);
            tokio::spawn(
                async move {
                    let _permit = permits.acquire().await.ok();
                    fetch_one(gateway.as_ref(), name, timeout).await
                }
                .instrument(span.clone()),
            )
        })
        .collect();

    let mut profiles = Vec::with_capacity(dispatched);
    for joined in join_all(tasks).await {
        match joined {
            Ok(Some(profile)) => profiles.push(profile),
            Ok(None) => {}
            Err(e) => tracing::error!(error = %e, "Stat lookup task failed to complete"),
        }
    }

    tracing::info!(
        dispatched,
        fetched = profiles.len(),
        dropped = dispatched - profiles.len(),
        "Fetched candidate stats"
    );

    profiles
}

async fn fetch_one<G>(gateway: &G, name: CanonicalName, timeout: Duration) -> Option<StatProfile>
where
    G: Gateway + ?Sized,
{
    let started = Instant::now();
    let result = match tokio::time::timeout(timeout, gateway.stat_profile(&name)).await {
        Ok(result) => result,
        Err(_) => Err(GatewayError::Timeout {
            resource: Resource::Pokemon,
            name: name.to_string(),
            elapsed: started.elapsed(),
        }),
    };

    match result {
        Ok(profile) => {
            tracing::debug!(
                candidate = %name,
                total = profile.total(),
                "Fetched stats"
            );
            Some(profile)
        }
        Err(e) => {
            tracing::warn!(candidate = %name, error = %e, "Dropping candidate");
            None
        }
    }
}
