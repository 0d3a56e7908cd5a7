//! Wiring: builds rules, decks, players and games from settings.
//!
//! The engine assumes its collaborators are consistent (players play by
//! the same rules the deck was built for, everyone reports to the same
//! display). A factory is the one place that guarantees it.

use std::sync::Arc;

use crate::core::{GameRng, Settings};
use crate::deck::Deck;
use crate::display::Display;
use crate::error::{CardError, ConfigError, GameError, PlayerError};
use crate::game::{Game, GameVariant};
use crate::games::MauMau;
use crate::players::{MostMatchesStrategy, Player, PlayerStrategy};
use crate::rules::Rules;

/// Produces the collaborators of one kind of game.
pub trait GameFactory {
    type Variant: GameVariant;

    /// The validated rules every other product shares.
    fn create_rules(&self) -> Arc<Rules>;

    fn create_display(&self) -> Arc<dyn Display>;

    fn create_strategy(&self) -> Arc<dyn PlayerStrategy>;

    /// A player wired to this factory's rules, strategy and display.
    fn create_player(&self, name: &str) -> Result<Player, PlayerError> {
        Player::new(name, self.create_rules(), self.create_strategy(), self.create_display())
    }

    /// A complete deck, shuffled with the `"deck"` stream of `rng`.
    fn create_deck(&self, rng: &GameRng) -> Result<Deck, CardError> {
        let rules = self.create_rules();
        let mut deck = Deck::standard(&rules)?;
        deck.shuffle(&mut rng.for_context("deck"));
        Ok(deck)
    }

    /// A fresh game, fully determined by `seed`.
    fn create_game(&self, seed: u64) -> Result<Game<Self::Variant>, GameError>;
}

/// Builds Mau Mau games.
pub struct MauMauFactory {
    settings: Settings,
    rules: Arc<Rules>,
    display: Arc<dyn Display>,
}

impl std::fmt::Debug for MauMauFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MauMauFactory")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl MauMauFactory {
    /// Validate `settings` once; every game built afterwards shares the rules.
    pub fn new(settings: Settings, display: Arc<dyn Display>) -> Result<Self, ConfigError> {
        let rules = Arc::new(Rules::new(settings.rules.clone())?);
        Ok(Self {
            settings,
            rules,
            display,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl GameFactory for MauMauFactory {
    type Variant = MauMau;

    fn create_rules(&self) -> Arc<Rules> {
        Arc::clone(&self.rules)
    }

    fn create_display(&self) -> Arc<dyn Display> {
        Arc::clone(&self.display)
    }

    fn create_strategy(&self) -> Arc<dyn PlayerStrategy> {
        Arc::new(MostMatchesStrategy)
    }

    fn create_game(&self, seed: u64) -> Result<Game<MauMau>, GameError> {
        let rng = GameRng::new(seed);
        let deck = self.create_deck(&rng)?;
        let game = Game::new(self.create_rules(), deck, self.create_display(), rng.for_context("table"))
            .with_config(self.settings.game.clone());
        Ok(game)
    }
}
