//! Card system: faces and physical cards.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`: the fixed universe of card faces
//! - `Card`: one physical card, validated by `Rules` and identified by `CardId`

pub mod attributes;
pub mod card;

pub use attributes::{Color, ParseFaceError, Rank, Suit};
pub use card::Card;
