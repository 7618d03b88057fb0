use crate::*;
pub use random::*;

mod random;

/// Source of mine positions for a new board.
///
/// Positions may repeat or land on occupied cells, the board skips those.
pub trait MineGenerator {
    fn generate(self) -> Vec<Position>;
}

impl MineGenerator for Vec<Position> {
    fn generate(self) -> Vec<Position> {
        self
    }
}

impl<const N: usize> MineGenerator for [Position; N] {
    fn generate(self) -> Vec<Position> {
        self.to_vec()
    }
}
