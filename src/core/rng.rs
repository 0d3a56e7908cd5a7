//! Seeded randomness for shuffles, random draws and seating.
//!
//! Every source of randomness in a game goes through a `GameRng`, so a
//! seed fully determines a game. Named context streams keep the deck
//! shuffle independent of what happens at the table: seating a different
//! number of players does not change the deck order.
//!
//! ```
//! use mau_mau::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut first = root.for_context("table");
//! let mut again = GameRng::new(42).for_context("table");
//! assert_eq!(first.choose_index(4), again.choose_index(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the stream for `context` ("deck", "table", ...) from this
    /// stream's seed. Does not advance `self`.
    ///
    /// The derivation is fixed, so a printed seed replays the same game on
    /// any platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context
            .bytes()
            .fold(mix(self.seed), |acc, byte| mix(acc.wrapping_add(GOLDEN_GAMMA).wrapping_add(u64::from(byte))));
        Self::new(seed)
    }

    /// Uniformly permute `items`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }

    /// A uniformly random index below `len`, or `None` if `len` is zero.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }
}
