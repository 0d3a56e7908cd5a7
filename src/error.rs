//! Error types.
//!
//! Local errors (`CardError`, `DeckError`, `PlayerError`) are returned to
//! the immediate caller, which may recover. `GameError` covers startup
//! failures and integrity violations; those end the game and surface to
//! whoever runs it.

use thiserror::Error;

use crate::cards::{Rank, Suit};
use crate::core::CardId;
use crate::game::Phase;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("invalid card: {rank} of {}", suit_name(.suit))]
    Invalid { suit: Option<Suit>, rank: Rank },
}

fn suit_name(suit: &Option<Suit>) -> String {
    suit.map_or_else(|| "no suit".to_string(), |s| s.to_string())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot draw card, stack is empty")]
    Empty,
    #[error("{0} not found in deck")]
    CardNotFound(CardId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("rules must allow at least one suit")]
    NoSuits,
    #[error("rules must allow at least one rank")]
    NoRanks,
    #[error("suit {0} listed more than once")]
    DuplicateSuit(Suit),
    #[error("rank {0} listed more than once")]
    DuplicateRank(Rank),
    #[error("jokers are configured by count, not listed as a rank")]
    JokerRank,
    #[error("invalid player bounds: min {min}, max {max}")]
    PlayerBounds { min: usize, max: usize },
    #[error("hand size must be at least 1")]
    ZeroHandSize,
    #[error("deck of {ranks} ranks x {suits} suits + {jokers} jokers is too large")]
    DeckTooLarge { ranks: usize, suits: usize, jokers: usize },
    #[error("rules must name at least one match attribute")]
    NoMatchAttributes,
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player's name cannot be empty")]
    EmptyName,
    #[error("discard pile has no live card")]
    NoLiveCard,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("maximum number of players ({max}) reached")]
    TableFull { max: usize },
    #[error("invalid number of players: {count}")]
    InvalidPlayerCount { count: usize },
    #[error("could not deal for player {player}: {source}")]
    Deal {
        player: String,
        #[source]
        source: DeckError,
    },
    #[error("not enough cards left to start the discard pile")]
    NotEnoughCards,
    #[error("someone is cheating: {actual} cards in play, expected {expected}")]
    Integrity { expected: usize, actual: usize },
    #[error("someone is cheating: {0} is in play twice")]
    DuplicateCard(CardId),
    #[error("turn of {player} failed: {source}")]
    Turn {
        player: String,
        #[source]
        source: PlayerError,
    },
    #[error("operation not allowed in phase {actual:?}, expected {expected:?}")]
    InvalidPhase { expected: Phase, actual: Phase },
    #[error(transparent)]
    Card(#[from] CardError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Rules(#[from] RulesError),
}
