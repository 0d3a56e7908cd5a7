//! The rules policy.
//!
//! `Rules` is the single source of truth for which cards exist, how many
//! players may sit down, how many cards they get, which cards match and
//! which way the turn passes. It is immutable once built and shared by
//! every collaborator behind an `Arc`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::matching::{CardMatcher, MatchAttribute};
use crate::cards::{Card, Color, Rank, Suit};
use crate::deck::Deck;
use crate::error::RulesError;

/// Which way the turn passes around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Seat index decreases.
    #[default]
    Clockwise,
    /// Seat index increases.
    CounterClockwise,
}

/// Playable cards picked from a hand, in hand order.
pub type Playable<'a> = SmallVec<[&'a Card; 8]>;

/// Declarative rules configuration.
///
/// `Default` is plain Mau Mau: a 52-card deck, 2-4 players, 7 cards each,
/// match on suit or value, clockwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed suits, in deck-building order.
    pub suits: Vec<Suit>,
    /// Allowed ranks; the order defines card value.
    pub ranks: Vec<Rank>,
    /// Number of jokers added to the deck.
    pub jokers: usize,
    pub min_players: usize,
    pub max_players: usize,
    pub hand_size: usize,
    /// Two cards match if any of these attributes is equal.
    pub match_on: Vec<MatchAttribute>,
    pub direction: Direction,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
            ranks: Rank::STANDARD.to_vec(),
            jokers: 0,
            min_players: 2,
            max_players: 4,
            hand_size: 7,
            match_on: vec![MatchAttribute::Suit, MatchAttribute::Value],
            direction: Direction::Clockwise,
        }
    }
}

/// Validated, immutable rules.
#[derive(Clone, Debug)]
pub struct Rules {
    config: RulesConfig,
    matchers: SmallVec<[CardMatcher; 4]>,
}

impl Default for Rules {
    fn default() -> Self {
        let config = RulesConfig::default();
        let matchers = Self::resolve_matchers(&config.match_on);
        Self { config, matchers }
    }
}

impl Rules {
    /// Validate a configuration and resolve its match attributes.
    pub fn new(config: RulesConfig) -> Result<Self, RulesError> {
        if config.suits.is_empty() {
            return Err(RulesError::NoSuits);
        }
        if config.ranks.is_empty() {
            return Err(RulesError::NoRanks);
        }
        for (i, suit) in config.suits.iter().enumerate() {
            if config.suits[..i].contains(suit) {
                return Err(RulesError::DuplicateSuit(*suit));
            }
        }
        for (i, rank) in config.ranks.iter().enumerate() {
            if rank.is_joker() {
                return Err(RulesError::JokerRank);
            }
            if config.ranks[..i].contains(rank) {
                return Err(RulesError::DuplicateRank(*rank));
            }
        }
        // Seats are addressed by a u8.
        if config.min_players == 0 || config.min_players > config.max_players || config.max_players > 255 {
            return Err(RulesError::PlayerBounds {
                min: config.min_players,
                max: config.max_players,
            });
        }
        if config.hand_size == 0 {
            return Err(RulesError::ZeroHandSize);
        }
        // Card ids are u32.
        let deck_size = config
            .ranks
            .len()
            .checked_mul(config.suits.len())
            .and_then(|n| n.checked_add(config.jokers))
            .filter(|&n| u32::try_from(n).is_ok());
        if deck_size.is_none() {
            return Err(RulesError::DeckTooLarge {
                ranks: config.ranks.len(),
                suits: config.suits.len(),
                jokers: config.jokers,
            });
        }
        if config.match_on.is_empty() {
            return Err(RulesError::NoMatchAttributes);
        }

        let matchers = Self::resolve_matchers(&config.match_on);
        Ok(Self { config, matchers })
    }

    fn resolve_matchers(attributes: &[MatchAttribute]) -> SmallVec<[CardMatcher; 4]> {
        attributes.iter().map(|attr| attr.matcher()).collect()
    }

    /// The configuration these rules were built from.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn allowed_suits(&self) -> &[Suit] {
        &self.config.suits
    }

    #[must_use]
    pub fn allowed_ranks(&self) -> &[Rank] {
        &self.config.ranks
    }

    #[must_use]
    pub fn jokers(&self) -> usize {
        self.config.jokers
    }

    #[must_use]
    pub fn min_players(&self) -> usize {
        self.config.min_players
    }

    #[must_use]
    pub fn max_players(&self) -> usize {
        self.config.max_players
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.config.hand_size
    }

    #[must_use]
    pub fn match_attributes(&self) -> &[MatchAttribute] {
        &self.config.match_on
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Is this face part of the card universe?
    ///
    /// A joker is always valid, whatever suit it is given.
    #[must_use]
    pub fn validate_card(&self, suit: Option<Suit>, rank: Rank) -> bool {
        if rank.is_joker() {
            return true;
        }
        match suit {
            Some(suit) => self.config.suits.contains(&suit) && self.config.ranks.contains(&rank),
            None => false,
        }
    }

    /// 0 for a joker, otherwise 1 + the rank's position in the allowed ranks.
    #[must_use]
    pub fn card_value(&self, card: &Card) -> u32 {
        if card.is_joker() {
            return 0;
        }
        self.config
            .ranks
            .iter()
            .position(|&rank| rank == card.rank())
            .map_or(0, |idx| idx as u32 + 1)
    }

    #[must_use]
    pub fn card_color(&self, card: &Card) -> Color {
        match card.suit() {
            Some(suit) if !card.is_joker() => Color::of_suit(suit),
            _ => Color::Any,
        }
    }

    /// Number of cards in a complete deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.config
            .ranks
            .len()
            .saturating_mul(self.config.suits.len())
            .saturating_add(self.config.jokers)
    }

    /// Can a game start with `players` players?
    ///
    /// Besides the seat bounds, dealing must leave at least one card for
    /// the discard pile. A deal too large to count never fits.
    #[must_use]
    pub fn validate_number_of_players(&self, players: usize) -> bool {
        players >= self.config.min_players
            && players <= self.config.max_players
            && players
                .checked_mul(self.config.hand_size)
                .map_or(false, |dealt| dealt < self.deck_size())
    }

    /// May `a` follow `b` (or the other way round)?
    ///
    /// A joker matches anything; otherwise any configured attribute being
    /// equal is enough.
    #[must_use]
    pub fn cards_match(&self, a: &Card, b: &Card) -> bool {
        if a.is_joker() || b.is_joker() {
            return true;
        }
        self.matchers.iter().any(|matches| matches(a, b))
    }

    /// Cards from `hand` that may be played on `top`, in hand order.
    #[must_use]
    pub fn pick_playable_cards<'a>(&self, top: &Card, hand: &'a Deck) -> Playable<'a> {
        hand.iter().filter(|card| self.cards_match(card, top)).collect()
    }
}
