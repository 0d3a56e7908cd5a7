//! A single physical playing card.
//!
//! Cards are only created through `Card::new`, which asks the `Rules` whether
//! the face is legal and derives value and color from them. A card is never
//! cloned: it is moved between decks, so at any moment exactly one deck
//! owns it.

use std::fmt;

use super::attributes::{Color, Rank, Suit};
use crate::core::CardId;
use crate::error::CardError;
use crate::rules::Rules;

/// An immutable playing card.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    suit: Option<Suit>,
    rank: Rank,
    value: u32,
    color: Color,
}

impl Card {
    /// Build a card, validating its face against `rules`.
    ///
    /// A joker ignores the given suit: it belongs to no suit.
    pub fn new(id: CardId, suit: Option<Suit>, rank: Rank, rules: &Rules) -> Result<Self, CardError> {
        if !rules.validate_card(suit, rank) {
            return Err(CardError::Invalid { suit, rank });
        }

        let suit = if rank.is_joker() { None } else { suit };
        let mut card = Self {
            id,
            suit,
            rank,
            value: 0,
            color: Color::Any,
        };
        card.value = rules.card_value(&card);
        card.color = rules.card_color(&card);
        Ok(card)
    }

    /// Convenience constructor for a suited card.
    pub fn suited(id: CardId, suit: Suit, rank: Rank, rules: &Rules) -> Result<Self, CardError> {
        Self::new(id, Some(suit), rank, rules)
    }

    /// Convenience constructor for a joker.
    pub fn joker(id: CardId, rules: &Rules) -> Result<Self, CardError> {
        Self::new(id, None, Rank::Joker, rules)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The suit, or `None` for a joker.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Value derived by the rules: 0 for a joker, otherwise the 1-based
    /// position of the rank in the allowed-rank ordering.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Same suit and rank, regardless of identity.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) if !self.is_joker() => write!(f, "{}{}", suit.symbol(), self.rank),
            _ => f.write_str(self.rank.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rules, RulesConfig};

    #[test]
    fn test_valid_card() {
        let rules = Rules::default();
        let card = Card::suited(CardId(0), Suit::Hearts, Rank::Seven, &rules).unwrap();

        assert_eq!(card.id(), CardId(0));
        assert_eq!(card.suit(), Some(Suit::Hearts));
        assert_eq!(card.rank(), Rank::Seven);
        assert_eq!(card.value(), 6);
        assert_eq!(card.color(), Color::Red);
        assert!(!card.is_joker());
    }

    #[test]
    fn test_card_not_allowed_by_rules() {
        let rules = Rules::new(RulesConfig {
            suits: vec![Suit::Hearts],
            ..RulesConfig::default()
        })
        .unwrap();

        let err = Card::suited(CardId(0), Suit::Spades, Rank::Ace, &rules).unwrap_err();
        assert!(matches!(err, CardError::Invalid { suit: Some(Suit::Spades), rank: Rank::Ace }));

        assert!(Card::new(CardId(1), None, Rank::Ace, &rules).is_err());
    }

    #[test]
    fn test_joker_has_no_suit() {
        let rules = Rules::default();
        let joker = Card::new(CardId(5), Some(Suit::Clubs), Rank::Joker, &rules).unwrap();

        assert!(joker.is_joker());
        assert_eq!(joker.suit(), None);
        assert_eq!(joker.value(), 0);
        assert_eq!(joker.color(), Color::Any);
    }

    #[test]
    fn test_identity_is_not_face() {
        let rules = Rules::default();
        let a = Card::joker(CardId(1), &rules).unwrap();
        let b = Card::joker(CardId(2), &rules).unwrap();

        assert!(a.same_face(&b));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let rules = Rules::default();
        let card = Card::suited(CardId(0), Suit::Hearts, Rank::Seven, &rules).unwrap();
        let ten = Card::suited(CardId(1), Suit::Clubs, Rank::Ten, &rules).unwrap();
        let joker = Card::joker(CardId(2), &rules).unwrap();

        assert_eq!(card.to_string(), "\u{2665}7");
        assert_eq!(ten.to_string(), "\u{2663}10");
        assert_eq!(joker.to_string(), "Joker");
    }
}
