//! Piece source - hands out uniquely numbered pieces.

use crate::rng::{KindPicker, SimpleRng};
use crate::types::Piece;

/// Generates pieces with monotonically increasing ids.
///
/// The id counter belongs to the instance, so independent sessions (and
/// parallel tests) never share numbering.
pub struct PieceSource {
    picker: Box<dyn KindPicker>,
    next_id: u32,
}

impl PieceSource {
    /// Source backed by the seeded LCG.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_picker(SimpleRng::new(seed))
    }

    pub fn with_picker(picker: impl KindPicker + 'static) -> Self {
        Self {
            picker: Box::new(picker),
            next_id: 0,
        }
    }

    /// Create the next piece and advance the id counter.
    pub fn generate(&mut self) -> Piece {
        let kind = self.picker.pick();
        let piece = Piece::new(kind, self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        piece
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl std::fmt::Debug for PieceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieceSource")
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
