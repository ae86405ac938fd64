//! Turn Battle Example
//!
//! Loads two combatants with their rosters and fights turn by turn, each side
//! always using its strongest unused move. The "presenter" task stands in for
//! an animation layer and acknowledges each turn after a short pause.
//!
//! Usage: cargo run --example turn_battle -- pikachu squirtle

use std::time::Duration;

use anyhow::{Context, Result, bail};
use duel_battle::{BattleSession, Move, Roster, Side};
use duel_client::{ArenaEvent, CatalogConfig, PokeApiClient, TurnDriver, load_combatants, load_roster};

/// Strongest move the side has not used yet
fn pick(session: &BattleSession, side: Side, roster: &Roster) -> Result<Move> {
    let Some(&mv) = session.eligible_moves(side, roster).first() else {
        bail!("Side {} has no moves left", side);
    };
    println!("Side {} selects {} ({})", side, mv.name, mv.power);
    Ok(mv.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(name_a), Some(name_b)) = (args.next(), args.next()) else {
        bail!("usage: turn_battle <combatant> <combatant>");
    };

    let catalog = PokeApiClient::new(CatalogConfig::from_env()?)?;
    let [a, b] = load_combatants(&catalog, &name_a, &name_b).await;
    let a = a.with_context(|| format!("Could not load {}", name_a))?;
    let b = b.with_context(|| format!("Could not load {}", name_b))?;

    let (roster_a, roster_b) = tokio::join!(load_roster(&catalog, &a), load_roster(&catalog, &b));
    println!("{}: {} moves, {}: {} moves", a.name, roster_a.len(), b.name, roster_b.len());

    let (mut driver, mut events) = TurnDriver::new(BattleSession::with_combatants(a, b));

    let presenter = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                ArenaEvent::TurnPending { report, ack } => {
                    println!(
                        "Turn {}: {} hits for {}, {} hits for {}",
                        report.ticket.turn,
                        report.move_of(Side::A).name,
                        report.damage_to(Side::B),
                        report.move_of(Side::B).name,
                        report.damage_to(Side::A),
                    );
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    let _ = ack.send(());
                }
                ArenaEvent::TurnApplied(outcome) => {
                    println!("  health: {} / {}", outcome.health[0], outcome.health[1]);
                }
                ArenaEvent::BattleOver(result) => {
                    let winner_score = if result.is_winner(Side::A) {
                        result.score1
                    } else {
                        result.score2
                    };
                    println!(
                        "{} (side {}) wins with a final score of {:.1}, side {} is out: {}",
                        result.winner,
                        result.winner_side,
                        winner_score,
                        result.loser_side(),
                        result.reason
                    );
                }
            }
        }
    });

    loop {
        for (side, roster) in [(Side::A, &roster_a), (Side::B, &roster_b)] {
            let mv = pick(driver.session(), side, roster)?;
            driver.session_mut().select_move(side, mv)?;
        }

        let outcome = if driver.session().is_started() {
            driver.next_turn().await?
        } else {
            driver.start().await?
        };
        if outcome.result.is_some() {
            break;
        }
    }

    drop(driver);
    presenter.await?;
    Ok(())
}
