//! Mau Mau.
//!
//! Everyone gets a hand from the top of the shuffled deck, one card
//! starts the discard pile, and a random seat goes first. On each turn
//! the active player sheds a card matching the live card or draws one.
//! First empty hand wins.

use std::thread;

use tracing::{debug, info, warn};

use crate::core::PlayerId;
use crate::deck::Deck;
use crate::error::GameError;
use crate::game::{GameState, GameVariant};

/// The Mau Mau variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MauMau;

impl GameVariant for MauMau {
    fn name(&self) -> &str {
        "Mau Mau"
    }

    fn deal(&mut self, state: &mut GameState) -> Result<(), GameError> {
        state.message("Deal has started...");
        let hand_size = state.rules().hand_size();
        let (table, players) = state.table_and_players_mut();

        for player in players.iter_mut() {
            let mut cards = Vec::with_capacity(hand_size);
            for _ in 0..hand_size {
                match table.drawing.pop_top() {
                    Ok(card) => cards.push(card),
                    Err(source) => {
                        // Put the partial hand back where it came from.
                        let mut partial = Deck::from_cards(cards);
                        partial.append(&mut table.drawing);
                        table.drawing = partial;
                        return Err(GameError::Deal {
                            player: player.name().to_string(),
                            source,
                        });
                    }
                }
            }
            let mut previous = player.deal(Deck::from_cards(cards));
            table.drawing.append(&mut previous);
        }

        debug!(hand_size, drawing = table.drawing.len(), "hands dealt");
        Ok(())
    }

    fn seed_discard(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let table = state.table_mut();
        let card = table.drawing.pop_top().map_err(|_| GameError::NotEnoughCards)?;
        let text = format!("Top card is: {card}");
        table.discard.push_top(card);
        state.message(&text);
        Ok(())
    }

    fn pick_first_player(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let count = state.number_of_players();
        let idx = state
            .rng_mut()
            .choose_index(count)
            .ok_or(GameError::InvalidPlayerCount { count })?;
        let first = PlayerId::new(idx as u8);
        state.set_active_player(first);

        let text = format!("{} was selected to start first!", state.players()[idx].name());
        state.message(&text);
        Ok(())
    }

    fn turn_started(&mut self, state: &mut GameState) -> Result<(), GameError> {
        if state.drawing_stack().is_empty() {
            warn!(
                discard = state.discard_stack().len(),
                turn = state.plays(),
                "drawing stack empty, reshuffling"
            );
            state.reshuffle_decks();
            state.record_reshuffle();
        }
        Ok(())
    }

    fn turn_finished(&mut self, state: &mut GameState) -> Result<(), GameError> {
        state.check_cheats()?;

        let delay = state.config().turn_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        state.record_play();
        Ok(())
    }

    fn game_finished(&mut self, state: &mut GameState) {
        if state.we_have_a_winner() {
            info!(rounds = state.rounds(), "game concluded");
            state.message(&format!("Game concluded after {} rounds", state.rounds()));
        } else {
            warn!(rounds = state.rounds(), "safety cap reached without a winner");
            state.message("This is taking too long. Let's start a new game!");
        }

        match state.reshuffles() {
            0 => {}
            1 => state.message("1 reshuffle necessary"),
            n => state.message(&format!("{n} reshuffles necessary")),
        }
    }
}
