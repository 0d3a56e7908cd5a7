//! Concrete game variants.

pub mod mau_mau;

pub use mau_mau::MauMau;
