use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses where mines go once the first cell has been revealed.
///
/// Implementations only read the board; the engine applies the returned
/// coordinates itself, so a failed generation never leaves a half-mined board.
/// Every returned coordinate must be distinct, in bounds and hold a
/// [`CellKind::Blank`] cell.
pub trait MineGenerator {
    fn generate(&mut self, board: &Board, mines: CellCount) -> Result<Vec<Coord2>>;
}
