//! Rank the counters of a creature against the live catalog.
//!
//! ```text
//! cargo run --example counters -- dragonite
//! COUNTERDEX_TOP_N=5 RUST_LOG=debug cargo run --example counters -- gengar
//! ```

use std::env;

use anyhow::{Context, Result};
use counterdex_client::PokeApiClient;
use counterdex_engine::{CounterError, CounterOptions};

fn options_from_env() -> Result<CounterOptions> {
    let mut options = CounterOptions::default();

    if let Ok(top_n) = env::var("COUNTERDEX_TOP_N") {
        options.top_n = top_n.parse().context("COUNTERDEX_TOP_N must be a number")?;
    }
    if let Ok(workers) = env::var("COUNTERDEX_MAX_WORKERS") {
        options.max_workers = workers
            .parse()
            .context("COUNTERDEX_MAX_WORKERS must be a number")?;
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let target = env::args().nth(1).unwrap_or_else(|| "charizard".to_string());
    let options = options_from_env()?;
    let client = PokeApiClient::from_env()?;

    match client.counters(&target, &options).await {
        Ok(ranked) if ranked.is_empty() => {
            println!("No counters could be scored for {target}.");
        }
        Ok(ranked) => {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Err(e @ CounterError::NotFound { .. }) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Counter lookup failed"),
    }

    Ok(())
}
