//! A seated player.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use super::strategy::PlayerStrategy;
use crate::core::CardId;
use crate::deck::Deck;
use crate::display::Display;
use crate::error::PlayerError;
use crate::game::Table;
use crate::rules::Rules;

/// What a player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Shed this card onto the discard pile.
    Played(CardId),
    /// Had nothing playable and took this card from the drawing stack.
    Drew(CardId),
}

/// A player: a name, a hand, and the rules and strategy they play by.
pub struct Player {
    name: String,
    hand: Deck,
    rules: Arc<Rules>,
    strategy: Arc<dyn PlayerStrategy>,
    display: Arc<dyn Display>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(
        name: impl Into<String>,
        rules: Arc<Rules>,
        strategy: Arc<dyn PlayerStrategy>,
        display: Arc<dyn Display>,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(Self {
            name,
            hand: Deck::new(),
            rules,
            strategy,
            display,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Deck {
        &self.hand
    }

    /// Give the player a new hand, returning the previous one.
    pub fn deal(&mut self, hand: Deck) -> Deck {
        let previous = std::mem::replace(&mut self.hand, hand);
        self.display
            .message(&format!("{} has been dealt: {}", self.name, self.hand));
        previous
    }

    /// Play one turn against `table`.
    ///
    /// Sheds the strategy's pick if anything in hand matches the live card,
    /// otherwise draws the top of the drawing stack. An empty drawing stack
    /// here is an error: the game reshuffles before every turn.
    pub fn play(&mut self, table: &mut Table) -> Result<TurnAction, PlayerError> {
        let playable: SmallVec<[CardId; 8]> = {
            let top = table.discard.top().ok_or(PlayerError::NoLiveCard)?;
            self.rules
                .pick_playable_cards(top, &self.hand)
                .iter()
                .map(|card| card.id())
                .collect()
        };

        if playable.is_empty() {
            let card = table.drawing.pop_top()?;
            let drawn = card.id();
            debug!(player = %self.name, card = %card, "no playable card, drawing");
            self.display.message(&format!(
                "{} does not have a suitable card, taking from deck: {}",
                self.name, card
            ));
            self.hand.push_top(card);
            return Ok(TurnAction::Drew(drawn));
        }

        let card = self
            .strategy
            .pick_card(&playable, &mut self.hand, &self.rules)?;
        let played = card.id();
        debug!(player = %self.name, card = %card, options = playable.len(), "playing card");
        self.display.message(&format!("{} plays {}", self.name, card));
        table.discard.push_top(card);
        self.extra_announcements();

        Ok(TurnAction::Played(played))
    }

    /// A player with an empty hand has won.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.hand.is_empty()
    }

    fn extra_announcements(&self) {
        if self.is_winner() {
            self.display.message(&format!("{} has won!!", self.name));
        } else if self.hand.len() == 1 {
            self.display
                .message(&format!("{} has 1 card remaining!", self.name));
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
