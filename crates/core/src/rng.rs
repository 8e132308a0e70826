//! RNG module - uniform piece kind selection
//!
//! Every generated piece draws its kind uniformly from [`PieceKind::ALL`].
//! The draw goes through the [`KindPicker`] trait so a session can be driven by
//! a seeded LCG in play and by a fixed script in tests.

use crate::types::PieceKind;

/// Source of piece kinds for [`crate::PieceSource`].
pub trait KindPicker {
    fn pick(&mut self) -> PieceKind;
}

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
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short
    /// period (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl KindPicker for SimpleRng {
    fn pick(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::LEN as u32) as usize]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
///
/// Lets tests and demos know exactly which kinds the source will produce.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedKinds {
    /// An empty script falls back to always producing `I`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            pos: 0,
        }
    }
}

impl KindPicker for ScriptedKinds {
    fn pick(&mut self) -> PieceKind {
        let Some(&kind) = self.kinds.get(self.pos) else {
            return PieceKind::I;
        };
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}

impl<P: KindPicker + ?Sized> KindPicker for Box<P> {
    fn pick(&mut self) -> PieceKind {
        (**self).pick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_picker_reaches_every_kind() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..200 {
            let kind = rng.pick();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_scripted_kinds_wrap() {
        let mut script = ScriptedKinds::new([PieceKind::T, PieceKind::O]);
        assert_eq!(script.pick(), PieceKind::T);
        assert_eq!(script.pick(), PieceKind::O);
        assert_eq!(script.pick(), PieceKind::T);
    }

    #[test]
    fn test_empty_script_defaults_to_i() {
        let mut script = ScriptedKinds::new(Vec::new());
        assert_eq!(script.pick(), PieceKind::I);
        assert_eq!(script.pick(), PieceKind::I);
    }
}
