use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::*;

/// Places mines at an explicit list of coordinates, for replays and tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, board: &Board, mines: CellCount) -> Result<Vec<Coord2>> {
        if self.mines.len() != usize::from(mines) {
            return Err(GameError::MineCountMismatch);
        }

        for (i, &coords) in self.mines.iter().enumerate() {
            let coords = board.validate_coords(coords)?;
            if !board[coords].kind().is_blank() || self.mines[..i].contains(&coords) {
                return Err(GameError::InvalidMinePlacement);
            }
        }

        Ok(self.mines.clone())
    }
}
