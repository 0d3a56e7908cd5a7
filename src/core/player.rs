//! Seat identification and turn rotation.
//!
//! Players sit in join order; `PlayerId(0)` is the first player to join.
//! Passing the turn is a fixed rotation over the seats, chosen by the
//! rules' `Direction`:
//!
//! - `Clockwise`: seat index decreases, wrapping to the last seat.
//! - `CounterClockwise`: seat index increases, wrapping to seat 0.
//!
//! ```
//! use mau_mau::core::PlayerId;
//! use mau_mau::rules::Direction;
//!
//! let first = PlayerId::new(0);
//! assert_eq!(first.next(Direction::Clockwise, 4), PlayerId::new(3));
//! assert_eq!(first.next(Direction::CounterClockwise, 4), PlayerId::new(1));
//! ```

use serde::{Deserialize, Serialize};

use crate::rules::Direction;

/// Seat index of a player (0-based, in join order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a table with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat that plays after this one.
    ///
    /// `player_count` must be non-zero and greater than this seat's index.
    #[must_use]
    pub fn next(self, direction: Direction, player_count: usize) -> PlayerId {
        debug_assert!(self.index() < player_count, "seat out of range");
        let last = player_count.saturating_sub(1) as u8;
        match direction {
            Direction::Clockwise => {
                if self.0 > 0 {
                    PlayerId(self.0 - 1)
                } else {
                    PlayerId(last)
                }
            }
            Direction::CounterClockwise => {
                if self.0 < last {
                    PlayerId(self.0 + 1)
                } else {
                    PlayerId(0)
                }
            }
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    }

    #[test]
    fn test_clockwise_wraps_to_last() {
        let order: Vec<_> = std::iter::successors(Some(PlayerId(1)), |p| {
            Some(p.next(Direction::Clockwise, 4))
        })
        .take(5)
        .collect();

        assert_eq!(
            order,
            vec![PlayerId(1), PlayerId(0), PlayerId(3), PlayerId(2), PlayerId(1)]
        );
    }

    #[test]
    fn test_counter_clockwise_wraps_to_first() {
        let order: Vec<_> = std::iter::successors(Some(PlayerId(2)), |p| {
            Some(p.next(Direction::CounterClockwise, 4))
        })
        .take(5)
        .collect();

        assert_eq!(
            order,
            vec![PlayerId(2), PlayerId(3), PlayerId(0), PlayerId(1), PlayerId(2)]
        );
    }

    #[test]
    fn test_rotation_is_bijective() {
        for count in 1..=6 {
            for dir in [Direction::Clockwise, Direction::CounterClockwise] {
                let mut seen: Vec<_> = PlayerId::all(count).map(|p| p.next(dir, count)).collect();
                seen.sort_by_key(|p| p.0);
                assert_eq!(seen, PlayerId::all(count).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_directions_are_inverse() {
        for p in PlayerId::all(5) {
            let there = p.next(Direction::Clockwise, 5);
            assert_eq!(there.next(Direction::CounterClockwise, 5), p);
        }
    }

    #[test]
    fn test_single_seat_stays_put() {
        let p = PlayerId(0);
        assert_eq!(p.next(Direction::Clockwise, 1), p);
        assert_eq!(p.next(Direction::CounterClockwise, 1), p);
    }
}
