//! Players and their card-selection strategies.
//!
//! ## Key Types
//!
//! - `Player`: a hand plus the rules/strategy/display it plays with
//! - `PlayerStrategy`: picks one card out of the playable ones
//! - `MostMatchesStrategy`: the greedy default

pub mod player;
pub mod strategy;

pub use player::{Player, TurnAction};
pub use strategy::{MostMatchesStrategy, PlayerStrategy};
