//! The shared card piles in the middle of the table.

use crate::deck::Deck;

/// Drawing stack and discard pile.
///
/// Players get `&mut Table` for their turn, so the game can lend out its
/// piles while it still owns the players.
#[derive(Debug, Default)]
pub struct Table {
    /// Face-down stack players draw from.
    pub drawing: Deck,
    /// Face-up pile; its top is the live card.
    pub discard: Deck,
}

impl Table {
    /// A table with the given drawing stack and an empty discard pile.
    #[must_use]
    pub fn new(drawing: Deck) -> Self {
        Self {
            drawing,
            discard: Deck::new(),
        }
    }

    /// Cards in both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.drawing.len() + self.discard.len()
    }
}
