//! Single-entity lookups.
//!
//! ```text
//! cargo run --example lookup -- info pikachu
//! cargo run --example lookup -- species pikachu
//! cargo run --example lookup -- habitat mewtwo
//! cargo run --example lookup -- move thunderbolt
//! cargo run --example lookup -- ability levitate
//! cargo run --example lookup -- evolution charmander
//! ```

use std::env;

use anyhow::{Result, bail};
use counterdex_client::{CanonicalName, PokeApiClient};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
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

    let args: Vec<String> = env::args().skip(1).collect();
    let [kind, name] = args.as_slice() else {
        bail!("usage: lookup <info|species|habitat|move|ability|evolution> <name>");
    };

    let name = CanonicalName::new(name)?;
    let client = PokeApiClient::from_env()?;

    match kind.as_str() {
        "info" => print_json(&client.pokemon_info(&name).await?),
        "species" => print_json(&client.species_details(&name).await?),
        "habitat" => {
            println!("{}", client.habitat(&name).await?);
            Ok(())
        }
        "move" => print_json(&client.move_details(&name).await?),
        "ability" => print_json(&client.pokemon_by_ability(&name).await?),
        "evolution" => {
            println!("{}", client.evolution_chain(&name).await?.join(" → "));
            Ok(())
        }
        other => bail!("unknown lookup {other:?}"),
    }
}
