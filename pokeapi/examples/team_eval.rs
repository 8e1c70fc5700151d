use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use typedex_pokeapi::{ApiConfig, HttpProvider, Roster, lookup_team};

/// Evaluate a team given as up to six names, or as a JSON roster file
/// with `--roster <path>`.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let roster = match args.as_slice() {
        [] => {
            eprintln!("Usage: team_eval <name>... | --roster <file.json>");
            process::exit(2);
        }
        [flag, path] if flag == "--roster" => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster {path}"))?;
            Roster::from_json(&json)?
        }
        names => Roster::from_names(names)?,
    };

    let provider = HttpProvider::new(ApiConfig::from_env()?)?;
    let lookup = lookup_team(&provider, &roster)
        .await
        .context("Failed to evaluate team")?;

    println!("\n=== Team ===\n");
    for (slot, member) in lookup.members.iter().enumerate() {
        match member {
            Some(summary) => println!("  {}. {}", slot + 1, summary.display_name),
            None => println!("  {}. -", slot + 1),
        }
    }

    println!("\n=== Summed damage taken ===\n");
    for (attacker, total) in lookup.matchups.threats() {
        println!("  {:<10} {}", attacker.display_name(), total);
    }

    Ok(())
}
