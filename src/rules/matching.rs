//! Match attributes.
//!
//! A match attribute names a card property that, when equal on two cards,
//! lets one follow the other. Each attribute resolves to a plain function
//! comparing that property; `Rules` resolves its attribute list once at
//! construction and only calls the functions afterwards.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Compares one property of two cards.
pub type CardMatcher = fn(&Card, &Card) -> bool;

/// A card property that can make two cards match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchAttribute {
    Suit,
    Value,
    Color,
}

impl MatchAttribute {
    /// The comparison function for this attribute.
    #[must_use]
    pub fn matcher(self) -> CardMatcher {
        match self {
            MatchAttribute::Suit => same_suit,
            MatchAttribute::Value => same_value,
            MatchAttribute::Color => same_color,
        }
    }
}

fn same_suit(a: &Card, b: &Card) -> bool {
    a.suit().is_some() && a.suit() == b.suit()
}

fn same_value(a: &Card, b: &Card) -> bool {
    a.value() == b.value()
}

fn same_color(a: &Card, b: &Card) -> bool {
    a.color() == b.color()
}
