//! Ordered card container.
//!
//! A `Deck` owns the cards it currently holds. Cards leave a deck by value
//! (`pop_*`, `remove`) and enter another by value (`push_*`, `append`),
//! so a card is never in two decks at once.
//!
//! Position 0 is the top of the deck: `iter()` walks from top to bottom.
//!
//! ## Usage
//!
//! ```
//! use mau_mau::deck::Deck;
//! use mau_mau::rules::Rules;
//!
//! let rules = Rules::default();
//! let mut drawing = Deck::standard(&rules).unwrap();
//! let mut hand = Deck::new();
//!
//! hand.push_top(drawing.pop_top().unwrap());
//! assert_eq!(drawing.len() + hand.len(), rules.deck_size());
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::cards::{Card, Rank};
use crate::core::{CardId, CardIdAllocator, GameRng};
use crate::error::{CardError, DeckError};
use crate::rules::Rules;

/// An ordered stack of cards.
#[derive(Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards; the first card becomes the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Build a complete, unshuffled deck for `rules`.
    ///
    /// Every allowed rank of every allowed suit, suit by suit, then the
    /// jokers. Card IDs are assigned from 0 in that order.
    pub fn standard(rules: &Rules) -> Result<Self, CardError> {
        let mut ids = CardIdAllocator::new();
        let mut cards = VecDeque::with_capacity(rules.deck_size());

        for &suit in rules.allowed_suits() {
            for &rank in rules.allowed_ranks() {
                cards.push_back(Card::suited(ids.alloc(), suit, rank, rules)?);
            }
        }
        for _ in 0..rules.jokers() {
            cards.push_back(Card::new(ids.alloc(), None, Rank::Joker, rules)?);
        }

        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// The bottom card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Is the card with this identity in the deck?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Find a card by identity.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Iterate from top to bottom.
    ///
    /// The deck cannot be mutated while the iterator is alive; collect the
    /// IDs you need first, then mutate.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// IDs of all cards, top to bottom.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    pub fn push_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Remove and return the bottom card.
    pub fn pop_bottom(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::Empty)
    }

    /// Remove and return a uniformly chosen card.
    pub fn pop_random(&mut self, rng: &mut GameRng) -> Result<Card, DeckError> {
        let idx = rng.choose_index(self.cards.len()).ok_or(DeckError::Empty)?;
        self.cards.remove(idx).ok_or(DeckError::Empty)
    }

    /// Remove the card with this identity.
    pub fn remove(&mut self, id: CardId) -> Result<Card, DeckError> {
        let idx = self
            .cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(DeckError::CardNotFound(id))?;
        self.cards.remove(idx).ok_or(DeckError::CardNotFound(id))
    }

    /// Move every card of `other` underneath this deck, keeping their order.
    ///
    /// `other` is left empty.
    pub fn append(&mut self, other: &mut Deck) {
        self.cards.append(&mut other.cards);
    }

    /// Uniformly permute the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("No cards");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
