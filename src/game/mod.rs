//! The turn engine.
//!
//! ## Key Types
//!
//! - `Game`: loop driver; owns the state and the variant
//! - `GameState`: table, players, counters, phase
//! - `GameVariant`: hooks a shedding game plugs into the loop
//! - `Table`: drawing stack and discard pile
//!
//! ## Lifecycle
//!
//! ```text
//! Joining -> Dealing -> FirstPlayerSelection
//!         -> {TurnStart -> PlayerAction -> TurnEnd}* -> GameOver
//! ```

pub mod state;
pub mod table;
pub mod variant;

use std::sync::Arc;

use tracing::{debug, info};

pub use state::{GameState, Phase};
pub use table::Table;
pub use variant::{GameResult, GameSummary, GameVariant};

use crate::core::{GameConfig, GameRng};
use crate::deck::Deck;
use crate::display::Display;
use crate::error::GameError;
use crate::games::MauMau;
use crate::players::Player;
use crate::rules::Rules;

/// A game of some shedding variant.
///
/// State and variant are separate fields so hooks can borrow the state
/// mutably while the variant itself is borrowed.
pub struct Game<V: GameVariant = MauMau> {
    state: GameState,
    variant: V,
}

impl<V: GameVariant> std::fmt::Debug for Game<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("variant", &self.variant.name())
            .field("state", &self.state)
            .finish()
    }
}

impl Game<MauMau> {
    /// A Mau Mau game over `deck`, which becomes the drawing stack as is.
    #[must_use]
    pub fn new(rules: Arc<Rules>, deck: Deck, display: Arc<dyn Display>, rng: GameRng) -> Self {
        Self::with_variant(MauMau, rules, deck, display, rng)
    }
}

impl<V: GameVariant> Game<V> {
    /// A game of `variant`. Announces the start through `display`.
    pub fn with_variant(
        mut variant: V,
        rules: Arc<Rules>,
        deck: Deck,
        display: Arc<dyn Display>,
        rng: GameRng,
    ) -> Self {
        let mut state = GameState::new(rules, deck, display, GameConfig::default(), rng);
        variant.game_started(&mut state);
        Self { state, variant }
    }

    /// Replace the loop configuration.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.state.set_config(config);
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state, for scenario setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Seat a player at the next free position.
    pub fn join(&mut self, player: Player) -> Result<(), GameError> {
        self.state.require_phase(Phase::Joining)?;
        let max = self.state.rules().max_players();
        if self.state.number_of_players() >= max {
            return Err(GameError::TableFull { max });
        }
        debug!(player = %player, seat = self.state.number_of_players(), "player joined");
        self.state.message(&format!("{} joined.", player.name()));
        self.state.seat(player);
        Ok(())
    }

    /// Seat every player, then check the table is a legal size.
    ///
    /// Stops at the first failed join.
    pub fn join_players(&mut self, players: impl IntoIterator<Item = Player>) -> Result<(), GameError> {
        for player in players {
            self.join(player)?;
        }
        self.validate_player_count()
    }

    fn validate_player_count(&self) -> Result<(), GameError> {
        let count = self.state.number_of_players();
        if self.state.rules().validate_number_of_players(count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount { count })
        }
    }

    /// Deal, seed the discard pile and choose who starts.
    pub fn setup(&mut self) -> Result<(), GameError> {
        self.state.require_phase(Phase::Joining)?;
        self.validate_player_count()?;

        self.state.set_phase(Phase::Dealing);
        self.variant.deal(&mut self.state)?;
        self.variant.seed_discard(&mut self.state)?;

        self.state.set_phase(Phase::FirstPlayerSelection);
        self.variant.pick_first_player(&mut self.state)?;

        info!(
            variant = self.variant.name(),
            players = self.state.number_of_players(),
            drawing = self.state.drawing_stack().len(),
            first = %self.state.active_player(),
            "setup complete"
        );
        self.state.set_phase(Phase::TurnStart);
        Ok(())
    }

    /// Play turns until the variant says stop.
    ///
    /// Errors from any hook or turn end the loop immediately; the game is
    /// left in the phase where it failed.
    pub fn start_game_loop(&mut self) -> Result<GameSummary, GameError> {
        self.state.require_phase(Phase::TurnStart)?;

        while self.variant.should_continue(&self.state) {
            self.state.set_phase(Phase::TurnStart);
            self.variant.turn_started(&mut self.state)?;

            self.state.set_phase(Phase::PlayerAction);
            let action = self.state.play_active_turn()?;
            debug!(
                seat = %self.state.active_player(),
                ?action,
                turn = self.state.plays() + 1,
                "turn played"
            );
            self.variant.next_player(&mut self.state);

            self.state.set_phase(Phase::TurnEnd);
            self.variant.turn_finished(&mut self.state)?;
        }

        self.state.set_phase(Phase::GameOver);
        self.variant.game_finished(&mut self.state);

        let summary = self.state.summary();
        info!(
            result = ?summary.result,
            rounds = summary.rounds,
            turns = summary.turns,
            reshuffles = summary.reshuffles,
            "game over"
        );
        Ok(summary)
    }

    /// `setup` followed by `start_game_loop`.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        self.setup()?;
        self.start_game_loop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::players::MostMatchesStrategy;

    fn new_game(seed: u64) -> (Game, Arc<RecordingDisplay>, Arc<Rules>) {
        let rules = Arc::new(Rules::default());
        let display = Arc::new(RecordingDisplay::new());
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::standard(&rules).unwrap();
        deck.shuffle(&mut rng);
        let game = Game::new(rules.clone(), deck, display.clone(), rng)
            .with_config(GameConfig::default().with_turn_delay_ms(0));
        (game, display, rules)
    }

    fn player(name: &str, rules: &Arc<Rules>, display: &Arc<RecordingDisplay>) -> Player {
        Player::new(name, rules.clone(), Arc::new(MostMatchesStrategy), display.clone()).unwrap()
    }

    #[test]
    fn test_new_game_announces_start() {
        let (game, display, _) = new_game(1);
        assert_eq!(game.phase(), Phase::Joining);
        assert!(display.contains("Starting new game..."));
    }

    #[test]
    fn test_join_until_full() {
        let (mut game, display, rules) = new_game(1);
        for name in ["Alice", "Bob", "Carol", "Eve"] {
            game.join(player(name, &rules, &display)).unwrap();
        }
        assert!(display.contains("Eve joined."));

        let err = game.join(player("Mallory", &rules, &display)).unwrap_err();
        assert!(matches!(err, GameError::TableFull { max: 4 }));
        assert_eq!(game.state().number_of_players(), 4);
    }

    #[test]
    fn test_join_players_rejects_single_player() {
        let (mut game, display, rules) = new_game(1);
        let err = game.join_players([player("Alice", &rules, &display)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayerCount { count: 1 }));
    }

    #[test]
    fn test_setup_deals_and_seeds() {
        let (mut game, display, rules) = new_game(3);
        game.join_players(["Alice", "Bob", "Carol", "Eve"].map(|n| player(n, &rules, &display)))
            .unwrap();

        game.setup().unwrap();

        let state = game.state();
        assert_eq!(game.phase(), Phase::TurnStart);
        assert_eq!(state.drawing_stack().len(), 52 - 4 * 7 - 1);
        assert_eq!(state.discard_stack().len(), 1);
        assert!(state.cards_are_dealt());
        assert!(state.players().iter().all(|p| p.hand().len() == 7));
        assert!(state.check_cheats().is_ok());
        assert!(display.contains("Deal has started..."));
        assert_eq!(display.count_starting_with("Top card is: "), 1);
        let picks = display
            .lines()
            .iter()
            .filter(|line| line.ends_with(" was selected to start first!"))
            .count();
        assert_eq!(picks, 1);
    }

    #[test]
    fn test_join_after_setup_is_rejected() {
        let (mut game, display, rules) = new_game(3);
        game.join_players(["Alice", "Bob"].map(|n| player(n, &rules, &display)))
            .unwrap();
        game.setup().unwrap();

        let err = game.join(player("Carol", &rules, &display)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidPhase { expected: Phase::Joining, actual: Phase::TurnStart }
        ));
    }

    #[test]
    fn test_loop_before_setup_is_rejected() {
        let (mut game, _, _) = new_game(3);
        let err = game.start_game_loop().unwrap_err();
        assert!(matches!(err, GameError::InvalidPhase { expected: Phase::TurnStart, .. }));
    }

    #[test]
    fn test_run_ends_in_game_over() {
        let (mut game, display, rules) = new_game(11);
        game.join_players(["Alice", "Bob", "Carol"].map(|n| player(n, &rules, &display)))
            .unwrap();

        let summary = game.run().unwrap();

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.state().check_cheats().is_ok());
        match summary.result {
            GameResult::Winner(seat) => {
                assert!(game.state().players()[seat.index()].is_winner());
                assert!(display.contains(&format!("Game concluded after {} rounds", summary.rounds)));
            }
            GameResult::Stalemate => {
                assert_eq!(summary.rounds, 100);
                assert!(display.contains("This is taking too long. Let's start a new game!"));
            }
        }
    }

    #[test]
    fn test_zero_safety_cap_plays_no_turns() {
        let (game, display, rules) = new_game(5);
        let mut game = game.with_config(GameConfig::default().with_safety_cap(0).with_turn_delay_ms(0));
        game.join_players(["Alice", "Bob"].map(|n| player(n, &rules, &display)))
            .unwrap();

        let summary = game.run().unwrap();

        assert_eq!(summary.turns, 0);
        assert_eq!(summary.result, GameResult::Stalemate);
        assert_eq!(game.state().players()[0].hand().len(), 7);
    }
}
