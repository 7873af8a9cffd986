// File: crates/sheet-core/src/color.rs
// Summary: Injectable background color strategies (fixed or random pastel).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Color;

/// Supplies the sheet background color. Called once per layout.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Always yields the same color. Layouts driven by it are fully deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedColor(pub Color);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Color {
        self.0
    }
}

/// Light pastel backgrounds drawn from a PRNG.
#[derive(Clone, Debug)]
pub struct RandomColor {
    rng: StdRng,
}

impl RandomColor {
    /// Lowest channel value; keeps black line work readable.
    pub const MIN_CHANNEL: u8 = 180;

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl ColorSource for RandomColor {
    fn next_color(&mut self) -> Color {
        let mut channel = || self.rng.gen_range(Self::MIN_CHANNEL..=u8::MAX);
        Color::rgb(channel(), channel(), channel())
    }
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

impl<C: ColorSource + ?Sized> ColorSource for Box<C> {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}
