//! Decks: the drawing stack, the discard pile and every player's hand.
//!
//! ## Key Types
//!
//! - `Deck`: ordered, exclusively-owning card container with stack-like
//!   and random access

pub mod stack;

pub use stack::Deck;
