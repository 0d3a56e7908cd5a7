//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use mau_mau::{
    Card, CardId, Deck, Game, GameConfig, GameRng, MostMatchesStrategy, Player, Rank, RecordingDisplay, Rules, Suit,
};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-captured subscriber. Level from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt().with_env_filter(filter).with_test_writer().without_time().try_init().ok();
    });
}

pub const NAMES: [&str; 4] = ["Alice", "Bob", "Carol", "Eve"];

/// Loop settings for tests: default cap, no pause.
pub fn fast_config() -> GameConfig {
    GameConfig::default().with_turn_delay_ms(0)
}

/// A Mau Mau game over a deck shuffled with `seed`, nobody seated yet.
pub fn seeded_game(rules: Arc<Rules>, seed: u64) -> (Game, Arc<RecordingDisplay>) {
    init_logging();
    let display = Arc::new(RecordingDisplay::new());
    let rng = GameRng::new(seed);
    let mut deck = Deck::standard(&rules).unwrap();
    deck.shuffle(&mut rng.for_context("deck"));
    let game = Game::new(rules, deck, display.clone(), rng.for_context("table")).with_config(fast_config());
    (game, display)
}

pub fn player(name: &str, rules: &Arc<Rules>, display: &Arc<RecordingDisplay>) -> Player {
    Player::new(name, rules.clone(), Arc::new(MostMatchesStrategy), display.clone()).unwrap()
}

pub fn players(names: &[&str], rules: &Arc<Rules>, display: &Arc<RecordingDisplay>) -> Vec<Player> {
    names.iter().map(|name| player(name, rules, display)).collect()
}

/// A hand built from faces, with IDs starting at `first_id`.
pub fn hand(rules: &Rules, first_id: u32, faces: &[(Suit, Rank)]) -> Deck {
    Deck::from_cards(
        faces
            .iter()
            .zip(first_id..)
            .map(|(&(suit, rank), id)| Card::suited(CardId(id), suit, rank, rules).unwrap())
            .collect(),
    )
}

/// Names of the players who acted, in turn order, read from the display.
pub fn acting_players(display: &RecordingDisplay) -> Vec<String> {
    display
        .lines()
        .iter()
        .filter(|line| line.contains(" plays ") || line.contains(" does not have a suitable card"))
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}
