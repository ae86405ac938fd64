//! Quick Verdict Example
//!
//! Fetches two combatants and prints who would win and why.
//!
//! Usage: cargo run --example quick_verdict -- charizard venusaur

use anyhow::{Context, Result, bail};
use duel_battle::{Combatant, Type, quick_verdict};
use duel_client::{CatalogConfig, PokeApiClient, load_combatants};

fn list(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}

fn describe(combatant: &Combatant) {
    println!(
        "  {} [{}] total {} / speed {}",
        combatant.name,
        list(&combatant.types),
        combatant.stats.total(),
        combatant.stats.speed,
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(name_a), Some(name_b)) = (args.next(), args.next()) else {
        bail!("usage: quick_verdict <combatant> <combatant>");
    };

    let config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
    let catalog = PokeApiClient::new(config).context("Failed to build catalog client")?;

    let [a, b] = load_combatants(&catalog, &name_a, &name_b).await;
    let a = a.with_context(|| format!("Could not load {}", name_a))?;
    let b = b.with_context(|| format!("Could not load {}", name_b))?;

    println!("Matchup:");
    describe(&a);
    describe(&b);

    let result = quick_verdict(&a, &b, None);
    println!();
    println!("{} wins by {}%", result.winner, result.win_percentage);
    println!("  {}", result.reason);
    println!("  scores: {:.1} vs {:.1}", result.score1, result.score2);
    println!(
        "  type multipliers: {} vs {}",
        result.type_info.multiplier1, result.type_info.multiplier2
    );

    Ok(())
}
