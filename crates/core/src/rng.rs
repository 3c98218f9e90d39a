//! RNG module - uniform random piece and position selection
//!
//! Every spawn draws its kind independently and uniformly from the seven
//! tetrominoes (no bag). A small seeded LCG keeps whole games reproducible,
//! which the tests and the `TERM_ARCADE_SEED` override rely on.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of a power-of-two LCG cycle with short periods, so the
    /// value is taken from the upper half of the state.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_between(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1).max(1) as u32;
        lo + self.next_range(span) as i32
    }

    /// Draw a piece kind uniformly from the seven tetrominoes
    pub fn next_kind(&mut self) -> PieceKind {
        let index = self.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::ALL[index]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
