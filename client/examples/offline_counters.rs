//! Run the counter pipeline against an in-memory catalog, no network needed.
//!
//! ```text
//! RUST_LOG=debug cargo run --example offline_counters
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use counterdex_engine::{CanonicalName, CounterOptions, MemoryGateway, Type, query, rank_counters};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let roster: [(&str, &[Type], [u32; 3]); 8] = [
        ("gyarados", &[Type::Water, Type::Flying], [125, 60, 81]),
        ("jolteon", &[Type::Electric], [65, 110, 130]),
        ("raichu", &[Type::Electric], [90, 90, 110]),
        ("zapdos", &[Type::Electric, Type::Flying], [90, 125, 100]),
        ("golem", &[Type::Rock, Type::Ground], [120, 55, 45]),
        ("aerodactyl", &[Type::Rock, Type::Flying], [105, 60, 130]),
        ("glaceon", &[Type::Ice], [60, 130, 65]),
        ("venusaur", &[Type::Grass, Type::Poison], [82, 100, 80]),
    ];

    let mut gateway = MemoryGateway::new()
        .with_chart_relations()
        .with_stat_latency(Duration::from_millis(25));
    for (name, types, [attack, special_attack, speed]) in roster {
        gateway =
            gateway.with_pokemon(CanonicalName::new(name)?, types, attack, special_attack, speed);
    }

    let target = [Type::Water, Type::Flying];
    println!("Counter types: {:?}", query::counter_types(&target));

    let options = CounterOptions::default().with_top_n(5).with_max_workers(3);
    let ranked = rank_counters(Arc::new(gateway), "Gyarados", &options).await?;

    for (rank, profile) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>3}  (atk {}, spa {}, spe {})",
            rank + 1,
            profile.name().display_name(),
            profile.total(),
            profile.attack(),
            profile.special_attack(),
            profile.speed()
        );
    }

    Ok(())
}
