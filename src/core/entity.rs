//! Card identity.
//!
//! Two cards with the same suit and rank are still different cards: a
//! deck may hold several jokers, and removal from a hand works on the
//! physical card, not on its face. Every `Card` carries a `CardId` that is
//! unique within the deck it was built from.
//!
//! ```
//! use mau_mau::core::CardId;
//!
//! let a = CardId::new(3);
//! let b = CardId::new(4);
//! assert_ne!(a, b);
//! assert_eq!(a.0, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Hands out fresh, sequential card IDs.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Start allocating at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}
