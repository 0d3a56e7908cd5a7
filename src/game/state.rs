//! Game state shared by the loop driver and the variant hooks.
//!
//! `GameState` holds everything except the variant itself:
//! - Rules, loop configuration, display, RNG
//! - The table (drawing stack and discard pile)
//! - Seated players, active seat, phase
//! - Counters: plays, rounds, reshuffles
//!
//! The operations that are the same for every shedding game (reshuffle,
//! integrity check, winner detection, seat rotation) live here; the hooks
//! in `GameVariant` decide when to call them.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::error;

use super::table::Table;
use super::variant::{GameResult, GameSummary};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::deck::Deck;
use crate::display::Display;
use crate::error::GameError;
use crate::players::{Player, TurnAction};
use crate::rules::Rules;

/// Position in the game's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Players may join.
    Joining,
    Dealing,
    FirstPlayerSelection,
    TurnStart,
    PlayerAction,
    TurnEnd,
    GameOver,
}

/// Everything the engine and variant hooks operate on.
pub struct GameState {
    rules: Arc<Rules>,
    config: GameConfig,
    display: Arc<dyn Display>,
    rng: GameRng,
    table: Table,
    players: Vec<Player>,
    active: PlayerId,
    phase: Phase,
    plays: u32,
    rounds: u32,
    reshuffles: u32,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("phase", &self.phase)
            .field("active", &self.active)
            .field("players", &self.players)
            .field("table", &self.table)
            .field("plays", &self.plays)
            .field("rounds", &self.rounds)
            .field("reshuffles", &self.reshuffles)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Fresh state: `deck` becomes the drawing stack, nobody is seated.
    #[must_use]
    pub fn new(rules: Arc<Rules>, deck: Deck, display: Arc<dyn Display>, config: GameConfig, rng: GameRng) -> Self {
        Self {
            rules,
            config,
            display,
            rng,
            table: Table::new(deck),
            players: Vec::new(),
            active: PlayerId::new(0),
            phase: Phase::Joining,
            plays: 0,
            rounds: 0,
            reshuffles: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Fail unless the game is in `expected`.
    pub fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Direct access to the piles, for variants and scenario setup.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    #[must_use]
    pub fn drawing_stack(&self) -> &Deck {
        &self.table.drawing
    }

    #[must_use]
    pub fn discard_stack(&self) -> &Deck {
        &self.table.discard
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The table and the players, borrowed together.
    pub fn table_and_players_mut(&mut self) -> (&mut Table, &mut [Player]) {
        (&mut self.table, &mut self.players)
    }

    #[must_use]
    pub fn number_of_players(&self) -> usize {
        self.players.len()
    }

    pub(crate) fn seat(&mut self, player: Player) {
        self.players.push(player);
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn set_active_player(&mut self, player: PlayerId) {
        debug_assert!(player.index() < self.players.len(), "no such seat");
        self.active = player;
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Send a message to the display.
    pub fn message(&self, text: &str) {
        self.display.message(text);
    }

    // === Counters ===

    /// Turns played so far.
    #[must_use]
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Completed rounds (one round = one turn per seated player).
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Count one finished turn, and a round every `number_of_players` turns.
    pub fn record_play(&mut self) {
        self.plays += 1;
        let seats = self.players.len().max(1) as u32;
        if self.plays % seats == 0 {
            self.rounds += 1;
        }
    }

    pub fn record_reshuffle(&mut self) {
        self.reshuffles += 1;
    }

    // === Engine operations ===

    /// Let the active player take their turn.
    pub fn play_active_turn(&mut self) -> Result<TurnAction, GameError> {
        let count = self.players.len();
        let player = self
            .players
            .get_mut(self.active.index())
            .ok_or(GameError::InvalidPlayerCount { count })?;
        player.play(&mut self.table).map_err(|source| GameError::Turn {
            player: player.name().to_string(),
            source,
        })
    }

    /// Pass the turn to the next seat in the rules' direction.
    pub fn set_next_player(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.active = self.active.next(self.rules.direction(), self.players.len());
    }

    /// Move the discard pile, except its live card, into the drawing stack
    /// and shuffle it.
    pub fn reshuffle_decks(&mut self) {
        self.message("Reshuffling the decks");

        let live = self.table.discard.pop_top().ok();
        self.table.drawing.append(&mut self.table.discard);
        self.table.drawing.shuffle(&mut self.rng);
        if let Some(card) = live {
            self.table.discard.push_top(card);
        }

        self.message(&format!("Playing stack now has {} cards.", self.table.discard.len()));
        self.message(&format!("Drawing stack now has {} cards.", self.table.drawing.len()));
    }

    /// Cards currently in the piles and all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.table.card_count() + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// Verify no card was created, lost or duplicated.
    ///
    /// The total must equal the rules' deck size and every card identity
    /// must appear exactly once.
    pub fn check_cheats(&self) -> Result<(), GameError> {
        let expected = self.rules.deck_size();
        let actual = self.total_cards();
        if actual != expected {
            error!(expected, actual, "card count mismatch");
            return Err(GameError::Integrity { expected, actual });
        }

        let mut seen = FxHashSet::default();
        seen.reserve(actual);
        let all_cards = self
            .table
            .drawing
            .iter()
            .chain(self.table.discard.iter())
            .chain(self.players.iter().flat_map(|p| p.hand().iter()));
        for card in all_cards {
            if !seen.insert(card.id()) {
                error!(card = %card.id(), "card in play twice");
                return Err(GameError::DuplicateCard(card.id()));
            }
        }
        Ok(())
    }

    /// Seat of the first player with an empty hand, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all(self.players.len()).find(|seat| self.players[seat.index()].is_winner())
    }

    #[must_use]
    pub fn we_have_a_winner(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn round_limit_reached(&self) -> bool {
        self.rounds >= self.config.safety_cap
    }

    /// Does every seated player hold at least one card?
    #[must_use]
    pub fn cards_are_dealt(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| !p.hand().is_empty())
    }

    /// Summary of the game so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            result: self.winner().map_or(GameResult::Stalemate, GameResult::Winner),
            rounds: self.rounds,
            turns: self.plays,
            reshuffles: self.reshuffles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::players::MostMatchesStrategy;

    fn state_with(players: &[&str]) -> (GameState, Arc<RecordingDisplay>) {
        let rules = Arc::new(Rules::default());
        let display = Arc::new(RecordingDisplay::new());
        let mut state = GameState::new(
            rules.clone(),
            Deck::standard(&rules).unwrap(),
            display.clone(),
            GameConfig::default().with_turn_delay_ms(0),
            GameRng::new(42),
        );
        for name in players {
            let player = Player::new(*name, rules.clone(), Arc::new(MostMatchesStrategy), display.clone()).unwrap();
            state.seat(player);
        }
        (state, display)
    }

    #[test]
    fn test_new_state() {
        let (state, _) = state_with(&["Alice", "Bob"]);
        assert_eq!(state.phase(), Phase::Joining);
        assert_eq!(state.number_of_players(), 2);
        assert_eq!(state.drawing_stack().len(), 52);
        assert!(state.discard_stack().is_empty());
        assert!(!state.cards_are_dealt());
        assert!(state.check_cheats().is_ok());
    }

    #[test]
    fn test_rounds_follow_player_count() {
        let (mut state, _) = state_with(&["Alice", "Bob", "Carol"]);
        for _ in 0..7 {
            state.record_play();
        }
        assert_eq!(state.plays(), 7);
        assert_eq!(state.rounds(), 2);
    }

    #[test]
    fn test_round_limit() {
        let (mut state, _) = state_with(&["Alice", "Bob"]);
        state.set_config(GameConfig::default().with_safety_cap(2));
        for _ in 0..3 {
            state.record_play();
        }
        assert!(!state.round_limit_reached());
        state.record_play();
        assert!(state.round_limit_reached());
    }

    #[test]
    fn test_set_next_player_clockwise() {
        let (mut state, _) = state_with(&["Alice", "Bob", "Carol"]);
        state.set_next_player();
        assert_eq!(state.active_player(), PlayerId::new(2));
        state.set_next_player();
        assert_eq!(state.active_player(), PlayerId::new(1));
    }

    #[test]
    fn test_reshuffle_keeps_live_card() {
        let (mut state, display) = state_with(&["Alice", "Bob"]);
        let table = state.table_mut();
        while let Ok(card) = table.drawing.pop_top() {
            table.discard.push_top(card);
        }
        let live = state.discard_stack().top().unwrap().id();

        state.reshuffle_decks();

        assert_eq!(state.discard_stack().len(), 1);
        assert_eq!(state.discard_stack().top().unwrap().id(), live);
        assert_eq!(state.drawing_stack().len(), 51);
        assert!(!state.drawing_stack().contains(live));
        assert!(state.check_cheats().is_ok());
        assert!(display.contains("Reshuffling the decks"));
        assert!(display.contains("Playing stack now has 1 cards."));
        assert!(display.contains("Drawing stack now has 51 cards."));
    }

    #[test]
    fn test_reshuffle_with_single_discard() {
        let (mut state, _) = state_with(&["Alice", "Bob"]);
        let table = state.table_mut();
        let card = table.drawing.pop_top().unwrap();
        table.discard.push_top(card);

        state.reshuffle_decks();

        assert_eq!(state.discard_stack().len(), 1);
        assert_eq!(state.drawing_stack().len(), 51);
    }

    #[test]
    fn test_check_cheats_detects_lost_card() {
        let (mut state, _) = state_with(&["Alice", "Bob"]);
        let _lost = state.table_mut().drawing.pop_top().unwrap();

        let err = state.check_cheats().unwrap_err();
        assert!(matches!(err, GameError::Integrity { expected: 52, actual: 51 }));
    }

    #[test]
    fn test_check_cheats_detects_duplicate_identity() {
        let (mut state, _) = state_with(&["Alice", "Bob"]);
        let rules = Rules::default();
        // Swap a real card for a forged copy of another one.
        let _real = state.table_mut().drawing.pop_bottom().unwrap();
        let top_id = state.drawing_stack().top().unwrap().id();
        let forged = crate::cards::Card::joker(top_id, &rules).unwrap();
        state.table_mut().discard.push_top(forged);

        let err = state.check_cheats().unwrap_err();
        assert!(matches!(err, GameError::DuplicateCard(id) if id == top_id));
    }

    #[test]
    fn test_summary_reports_empty_hand_as_winner() {
        let (mut state, _) = state_with(&["Alice", "Bob"]);
        let hand = Deck::from_cards(vec![state.table_mut().drawing.pop_top().unwrap()]);
        let (_, players) = state.table_and_players_mut();
        players[0].deal(hand);

        let summary = state.summary();
        assert_eq!(summary.result, GameResult::Winner(PlayerId::new(1)));
        assert!(state.we_have_a_winner());
    }

    #[test]
    fn test_winner_is_first_empty_seat() {
        let (mut state, _) = state_with(&["Alice", "Bob", "Carol"]);
        assert_eq!(state.winner(), Some(PlayerId::new(0)));

        for seat in 0..2 {
            let hand = Deck::from_cards(vec![state.table_mut().drawing.pop_top().unwrap()]);
            state.table_and_players_mut().1[seat].deal(hand);
        }
        assert_eq!(state.winner(), Some(PlayerId::new(2)));

        let hand = Deck::from_cards(vec![state.table_mut().drawing.pop_top().unwrap()]);
        state.table_and_players_mut().1[2].deal(hand);
        assert_eq!(state.winner(), None);
        assert!(!state.we_have_a_winner());
    }
}
