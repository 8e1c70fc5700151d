use std::env;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_pokeapi::{ApiConfig, HttpProvider, Identifier, lookup_matchups};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(input) = env::args().nth(1) else {
        eprintln!("Usage: lookup <name or dex number>");
        process::exit(2);
    };

    let provider = HttpProvider::new(ApiConfig::from_env()?)?;
    let identifier = Identifier::parse(&input)?;
    let lookup = lookup_matchups(&provider, &identifier)
        .await
        .with_context(|| format!("Failed to look up {input}"))?;

    let summary = &lookup.entry.summary;
    let types: Vec<_> = summary.types.iter().map(|t| t.display_name()).collect();

    println!("\n{} ({})", summary.display_name, summary.dex_label());
    println!("Type: {}", types.join(" / "));
    println!("Height: {} m  Weight: {} kg", summary.height_m, summary.weight_kg);
    if lookup.entry.creature.ground_immune() {
        println!("Ability: immune to Ground");
    }
    println!("\n=== Damage taken ===\n");

    for (attacker, multiplier) in lookup.matchups.iter() {
        println!("  {:<10} {}x", attacker.display_name(), multiplier);
    }

    Ok(())
}
