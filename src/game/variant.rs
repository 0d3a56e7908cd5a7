//! Game variant hooks.
//!
//! Variants implement `GameVariant` to define their rules of play:
//! - How hands are dealt and the discard pile is started
//! - Who goes first
//! - What happens at the start and end of every turn
//! - When the game is over
//!
//! The loop driver in `Game` calls the hooks in a fixed order and never
//! interprets variant-specific concepts itself.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::core::PlayerId;
use crate::error::GameError;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// This seat emptied their hand.
    Winner(PlayerId),
    /// The round safety cap was hit first.
    Stalemate,
}

/// Outcome and statistics of a finished game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,
    pub rounds: u32,
    pub turns: u32,
    pub reshuffles: u32,
}

/// Hooks a shedding-game variant plugs into the turn loop.
///
/// ## Call Order
///
/// - construction: `game_started`
/// - `Game::setup`: `deal`, `seed_discard`, `pick_first_player`
/// - each turn while `should_continue`: `turn_started`, the active
///   player's turn, `next_player`, `turn_finished`
/// - after the loop: `game_finished`
///
/// Any `Err` from a hook stops the game.
pub trait GameVariant {
    /// Human-readable variant name.
    fn name(&self) -> &str;

    /// Called once when the game object is created.
    fn game_started(&mut self, state: &mut GameState) {
        state.message("Starting new game...");
    }

    /// Give every seated player a starting hand.
    fn deal(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Put the first live card on the discard pile.
    fn seed_discard(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Choose the seat that plays first.
    fn pick_first_player(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Before the active player acts.
    fn turn_started(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Pass the turn on.
    fn next_player(&mut self, state: &mut GameState) {
        state.set_next_player();
    }

    /// After the active player acted and the turn has passed on.
    fn turn_finished(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Should another turn be played?
    fn should_continue(&self, state: &GameState) -> bool {
        !state.we_have_a_winner() && !state.round_limit_reached()
    }

    /// Called once after the last turn.
    fn game_finished(&mut self, state: &mut GameState);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes() {
        let summary = GameSummary {
            result: GameResult::Winner(PlayerId::new(2)),
            rounds: 12,
            turns: 47,
            reshuffles: 1,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"result":{"Winner":2},"rounds":12,"turns":47,"reshuffles":1}"#
        );
    }
}
