//! Async client for the PokeAPI catalog.
//!
//! [`PokeApiClient`] is the HTTP implementation of the engine's
//! [`Gateway`](counterdex_engine::Gateway) seam, so it can drive
//! [`rank_counters`] directly. It also serves single-entity lookups
//! (creature info, species details, habitat, moves, abilities, evolution
//! chains) and side-by-side comparisons.
//!
//! # Example
//!
//! ```ignore
//! use counterdex_client::{ClientConfig, PokeApiClient};
//! use counterdex_engine::CounterOptions;
//!
//! let client = PokeApiClient::new(ClientConfig::from_env()?)?;
//! let ranked = client.counters("gengar", &CounterOptions::default()).await?;
//! println!("{}", serde_json::to_string_pretty(&ranked)?);
//! ```

mod compare;
pub mod config;
mod gateway;
mod http;
mod lookup;

#[cfg(test)]
mod test_server;

use std::sync::Arc;

use anyhow::{Context, Result};
use counterdex_engine::{CounterError, CounterOptions, RankedResult, rank_counters};

pub use compare::{Comparison, ComparisonRecord};
pub use config::ClientConfig;
pub use lookup::{Habitat, MoveDetails, PokemonInfo, SpeciesDetails};

pub use counterdex_api::CanonicalName;
pub use counterdex_engine::GatewayError;

/// HTTP client for the catalog. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PokeApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    /// Build a client from `POKEAPI_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Rank the counters of `target`, using this client as the gateway
    pub async fn counters(
        &self,
        target: &str,
        options: &CounterOptions,
    ) -> Result<RankedResult, CounterError> {
        rank_counters(Arc::new(self.clone()), target, options).await
    }
}
