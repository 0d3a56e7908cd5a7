//! # mau-mau
//!
//! A shedding card game engine: players take turns matching the live card
//! on the discard pile, draw when they cannot, and the first empty hand
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: Suits, ranks, jokers, player bounds, hand size,
//!    match criteria and direction live in a validated `Rules` value. The
//!    engine asks it every legality question.
//!
//! 2. **Cards Have Identity**: Every physical card carries a `CardId` and
//!    is moved, never copied. After each turn the engine audits that every
//!    card is in play exactly once.
//!
//! 3. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a seed reproduces a game.
//!
//! 4. **Variants Plug In**: The loop driver calls `GameVariant` hooks;
//!    Mau Mau is one implementation.
//!
//! ## Modules
//!
//! - `core`: Card and seat IDs, RNG, configuration
//! - `cards`: Suits, ranks, colors and cards
//! - `deck`: Ordered card stacks
//! - `rules`: The rules policy and card matching
//! - `players`: Players and card-selection strategies
//! - `game`: Game state, variant hooks and the turn loop
//! - `games`: Concrete variants
//! - `display`: Player-visible message sinks
//! - `factory`: Wiring everything together from settings
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod players;
pub mod game;
pub mod games;
pub mod display;
pub mod factory;
pub mod error;

// Re-export commonly used types
pub use crate::core::{CardId, GameConfig, GameRng, PlayerId, Settings};

pub use crate::cards::{Card, Color, Rank, Suit};

pub use crate::deck::Deck;

pub use crate::rules::{Direction, MatchAttribute, Rules, RulesConfig};

pub use crate::players::{MostMatchesStrategy, Player, PlayerStrategy, TurnAction};

pub use crate::game::{Game, GameResult, GameState, GameSummary, GameVariant, Phase, Table};

pub use crate::games::MauMau;

pub use crate::display::{ConsoleDisplay, Display, NullDisplay, RecordingDisplay, TracingDisplay};

pub use crate::factory::{GameFactory, MauMauFactory};

pub use crate::error::{CardError, ConfigError, DeckError, GameError, PlayerError, RulesError};
