//! Secret generation
//!
//! Every position is drawn independently and uniformly from the palette, so
//! repeated colors in the secret are normal.

use super::{CODE_LENGTH, Color, Sequence};
use rand::rngs::StdRng;
use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Draws random secrets
pub struct SecretGenerator<R = StdRng> {
    rng: R,
}

impl SecretGenerator<StdRng> {
    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator: the same seed yields the same secrets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded generator when a seed is given, OS-seeded otherwise
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> SecretGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a new secret
    pub fn generate(&mut self) -> Sequence {
        let mut colors = [Color::Red; CODE_LENGTH];
        for slot in &mut colors {
            if let Some(&color) = Color::ALL.choose(&mut self.rng) {
                *slot = color;
            }
        }
        Sequence::new(colors)
    }
}
