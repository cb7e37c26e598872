use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::*;

/// Uniform placement by rejection sampling: draw random cells until enough
/// blank ones have been hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, board: &Board, mines: CellCount) -> Result<Vec<Coord2>> {
        let available = board.count_cells(|cell| cell.kind().is_blank());
        if mines > available {
            log::warn!(
                "Cannot place {} mines, only {} blank cells left",
                mines,
                available
            );
            return Err(GameError::TooManyMines);
        }

        let size = board.size();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut taken = BTreeSet::new();
        let mut placed = Vec::with_capacity(mines.into());
        let mut attempts: u32 = 0;

        while placed.len() < usize::from(mines) {
            let coords = (rng.random_range(0..size), rng.random_range(0..size));
            attempts += 1;

            if board[coords].kind().is_blank() && taken.insert(coords) {
                placed.push(coords);
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board in {} attempts",
            placed.len(),
            size,
            size,
            attempts
        );
        Ok(placed)
    }
}
