use std::env;

use anyhow::{Context, Result};
use counterdex_client::{CanonicalName, PokeApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let first = env::args().nth(1).unwrap_or_else(|| "charizard".to_string());
    let second = env::args().nth(2).unwrap_or_else(|| "blastoise".to_string());

    let client = PokeApiClient::from_env()?;
    let comparison = client
        .compare(&CanonicalName::new(&first)?, &CanonicalName::new(&second)?)
        .await
        .with_context(|| format!("Failed to compare {first} and {second}"))?;

    println!("{}", serde_json::to_string_pretty(&comparison)?);
    Ok(())
}
