//! Rules policy.
//!
//! `Rules` declares the card universe, player bounds, hand size, match
//! criteria and turn direction, and answers every legality question the
//! engine asks:
//! - Is this (suit, rank) a legal card?
//! - What are a card's value and color?
//! - Do two cards match? Which cards in a hand are playable?
//!
//! The engine never interprets card faces directly.

pub mod matching;
pub mod policy;

pub use matching::{CardMatcher, MatchAttribute};
pub use policy::{Direction, Playable, Rules, RulesConfig};
