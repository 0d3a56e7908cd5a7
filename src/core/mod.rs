//! Core engine types: card identity, seats, RNG, configuration.
//!
//! These are the building blocks shared by every other module. None of
//! them know about the rules of a particular game.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;

pub use entity::{CardId, CardIdAllocator};
pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{GameConfig, Settings, DEFAULT_SAFETY_CAP, DEFAULT_TURN_DELAY_MS};
