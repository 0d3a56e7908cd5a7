//! Card selection strategies.
//!
//! A strategy only chooses; it never decides legality. The player hands it
//! the cards the rules already found playable.

use crate::cards::Card;
use crate::core::CardId;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::rules::{Playable, Rules};

/// Picks which playable card to shed.
pub trait PlayerStrategy: Send + Sync {
    /// Choose one card from `playable`, all of which are in `hand`.
    ///
    /// Returns `None` only when `playable` is empty.
    fn choose(&self, playable: &[&Card], hand: &Deck, rules: &Rules) -> Option<CardId>;

    /// Choose a card and take it out of `hand`.
    ///
    /// `playable` are IDs collected from `hand` beforehand, so the hand is
    /// not borrowed while it is mutated.
    fn pick_card(&self, playable: &[CardId], hand: &mut Deck, rules: &Rules) -> Result<Card, DeckError> {
        let chosen = {
            let cards = playable
                .iter()
                .map(|&id| hand.get(id).ok_or(DeckError::CardNotFound(id)))
                .collect::<Result<Playable<'_>, _>>()?;
            self.choose(&cards, hand, rules).ok_or(DeckError::Empty)?
        };
        hand.remove(chosen)
    }
}

/// Greedy strategy: shed the playable card that matches the most other
/// cards in the hand.
///
/// Ties go to the first such card in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostMatchesStrategy;

impl MostMatchesStrategy {
    /// How many other cards of `hand` match `card`.
    #[must_use]
    pub fn match_count(card: &Card, hand: &Deck, rules: &Rules) -> usize {
        hand.iter()
            .filter(|other| other.id() != card.id() && rules.cards_match(card, other))
            .count()
    }
}

impl PlayerStrategy for MostMatchesStrategy {
    fn choose(&self, playable: &[&Card], hand: &Deck, rules: &Rules) -> Option<CardId> {
        let mut best: Option<(CardId, usize)> = None;
        for card in playable {
            let matches = Self::match_count(card, hand, rules);
            if best.map_or(true, |(_, most)| matches > most) {
                best = Some((card.id(), matches));
            }
        }
        best.map(|(id, _)| id)
    }
}
