//! Async turn driver
//!
//! Runs a [`BattleSession`] turn as a two-step exchange with whatever is
//! presenting the battle: the computed turn is sent out as
//! [`ArenaEvent::TurnPending`], and only once the presenter answers on the
//! enclosed ack channel is the damage applied.

use anyhow::{Context, Result, anyhow};
use duel_battle::{BattleResult, BattleSession, TurnOutcome, TurnReport};
use tokio::sync::{mpsc, oneshot};

/// Events emitted to the presentation layer
#[derive(Debug)]
pub enum ArenaEvent {
    /// A turn is computed; send on `ack` once it has been shown
    TurnPending {
        report: TurnReport,
        ack: oneshot::Sender<()>,
    },

    /// The acknowledged turn has been applied
    TurnApplied(TurnOutcome),

    /// One or both sides fainted
    BattleOver(BattleResult),
}

/// Drives a session's turns through the presentation layer
pub struct TurnDriver {
    session: BattleSession,
    events: mpsc::UnboundedSender<ArenaEvent>,
}

impl TurnDriver {
    /// Create a driver and the receiving end of its event stream
    pub fn new(session: BattleSession) -> (Self, mpsc::UnboundedReceiver<ArenaEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { session, events }, rx)
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    /// Session access for loading combatants and selecting moves
    pub fn session_mut(&mut self) -> &mut BattleSession {
        &mut self.session
    }

    pub fn into_session(self) -> BattleSession {
        self.session
    }

    /// Start the battle and play out its first turn
    pub async fn start(&mut self) -> Result<TurnOutcome> {
        let report = self
            .session
            .start_battle()
            .context("Failed to start battle")?;
        self.settle(report).await
    }

    /// Play the next turn with the currently selected moves
    pub async fn next_turn(&mut self) -> Result<TurnOutcome> {
        let report = self
            .session
            .execute_turn()
            .context("Failed to execute turn")?;
        self.settle(report).await
    }

    /// Offer the pending turn to the presenter again
    ///
    /// Used after an earlier acknowledgement never arrived.
    pub async fn resume(&mut self) -> Result<TurnOutcome> {
        let report = self
            .session
            .pending_turn()
            .cloned()
            .ok_or_else(|| anyhow!("No turn is waiting for acknowledgement"))?;
        self.settle(report).await
    }

    async fn settle(&mut self, report: TurnReport) -> Result<TurnOutcome> {
        let ticket = report.ticket;
        tracing::debug!(
            turn = ticket.turn,
            damage_to_a = report.damage[0],
            damage_to_b = report.damage[1],
            "Turn pending"
        );

        let (ack, acked) = oneshot::channel();
        self.events
            .send(ArenaEvent::TurnPending { report, ack })
            .map_err(|_| anyhow!("Presentation layer disconnected"))?;

        acked
            .await
            .map_err(|_| anyhow!("Turn {} was never acknowledged", ticket.turn))?;

        let outcome = self
            .session
            .acknowledge_turn(ticket)
            .with_context(|| format!("Failed to apply turn {}", ticket.turn))?;
        tracing::debug!(
            turn = outcome.turn,
            health_a = outcome.health[0],
            health_b = outcome.health[1],
            "Turn applied"
        );

        // Nobody listening any more is not this turn's problem
        let _ = self.events.send(ArenaEvent::TurnApplied(outcome.clone()));
        if let Some(result) = &outcome.result {
            tracing::info!(winner = %result.winner, reason = %result.reason, "Battle over");
            let _ = self.events.send(ArenaEvent::BattleOver(result.clone()));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use duel_battle::{BaseStats, Combatant, MAX_HEALTH, Move, Side, Type};

    use super::*;

    fn session() -> BattleSession {
        let charmander =
            Combatant::new("charmander", &[Type::Fire], BaseStats::new(39, 52, 43, 60, 50, 65));
        let bulbasaur = Combatant::new(
            "bulbasaur",
            &[Type::Grass, Type::Poison],
            BaseStats::new(45, 49, 49, 65, 65, 45),
        );
        BattleSession::with_combatants(charmander, bulbasaur)
    }

    fn select(driver: &mut TurnDriver, a: Move, b: Move) {
        let session = driver.session_mut();
        session.select_move(Side::A, a).unwrap();
        session.select_move(Side::B, b).unwrap();
    }

    /// Acknowledge every pending turn and collect the events seen
    fn spawn_presenter(
        mut rx: mpsc::UnboundedReceiver<ArenaEvent>,
    ) -> tokio::task::JoinHandle<Vec<String>> {
        tokio::spawn(async move {
            let mut seen = Vec::new();
            while let Some(event) = rx.recv().await {
                match event {
                    ArenaEvent::TurnPending { report, ack } => {
                        seen.push(format!("pending {}", report.ticket.turn));
                        ack.send(()).unwrap();
                    }
                    ArenaEvent::TurnApplied(outcome) => {
                        seen.push(format!("applied {}", outcome.turn));
                    }
                    ArenaEvent::BattleOver(result) => {
                        seen.push(format!("over {}", result.winner));
                    }
                }
            }
            seen
        })
    }

    #[tokio::test]
    async fn test_turn_applied_after_ack() {
        let (mut driver, rx) = TurnDriver::new(session());
        let presenter = spawn_presenter(rx);

        select(
            &mut driver,
            Move::new("Ember", Type::Fire, 40),
            Move::new("Vine Whip", Type::Grass, 45),
        );
        let outcome = driver.start().await.unwrap();

        assert_eq!(outcome.turn, 1);
        assert_eq!(outcome.health, [MAX_HEALTH - 45, MAX_HEALTH - 40]);
        assert!(outcome.result.is_none());
        assert!(driver.session().pending_turn().is_none());

        drop(driver);
        let seen = presenter.await.unwrap();
        assert_eq!(seen, vec!["pending 1", "applied 1"]);
    }

    #[tokio::test]
    async fn test_knockout_emits_battle_over() {
        let (mut driver, rx) = TurnDriver::new(session());
        let presenter = spawn_presenter(rx);

        select(
            &mut driver,
            Move::new("Ember", Type::Fire, 40),
            Move::new("Vine Whip", Type::Grass, 45),
        );
        driver.start().await.unwrap();

        select(
            &mut driver,
            Move::new("Overheat", Type::Fire, 470),
            Move::new("Tackle", Type::Normal, 40),
        );
        let outcome = driver.next_turn().await.unwrap();

        let result = outcome.result.unwrap();
        assert_eq!(result.winner, "charmander");
        assert!(driver.session().is_over());

        drop(driver);
        let seen = presenter.await.unwrap();
        assert_eq!(
            seen,
            vec!["pending 1", "applied 1", "pending 2", "applied 2", "over charmander"]
        );
    }

    #[tokio::test]
    async fn test_dropped_ack_leaves_turn_pending() {
        let (mut driver, mut rx) = TurnDriver::new(session());
        select(
            &mut driver,
            Move::new("Ember", Type::Fire, 40),
            Move::new("Vine Whip", Type::Grass, 45),
        );

        let dropper = tokio::spawn(async move {
            if let Some(ArenaEvent::TurnPending { ack, .. }) = rx.recv().await {
                drop(ack);
            }
            rx
        });

        assert!(driver.start().await.is_err());
        assert!(driver.session().pending_turn().is_some());
        assert_eq!(driver.session().health(Side::A), MAX_HEALTH);

        // Another turn cannot be started over the pending one
        assert!(driver.next_turn().await.is_err());

        let rx = dropper.await.unwrap();
        let presenter = spawn_presenter(rx);
        let outcome = driver.resume().await.unwrap();
        assert_eq!(outcome.turn, 1);
        assert_eq!(driver.session().health(Side::B), MAX_HEALTH - 40);

        drop(driver);
        assert_eq!(presenter.await.unwrap(), vec!["pending 1", "applied 1"]);
    }

    #[tokio::test]
    async fn test_disconnected_presenter() {
        let (mut driver, rx) = TurnDriver::new(session());
        drop(rx);
        select(
            &mut driver,
            Move::new("Ember", Type::Fire, 40),
            Move::new("Vine Whip", Type::Grass, 45),
        );

        assert!(driver.start().await.is_err());
        assert!(driver.session().pending_turn().is_some());
    }

    #[tokio::test]
    async fn test_resume_without_pending_turn() {
        let (mut driver, _rx) = TurnDriver::new(session());
        assert!(driver.resume().await.is_err());
    }
}
