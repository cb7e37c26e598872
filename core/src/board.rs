use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells, fixed in shape once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Creates a `size × size` board of blank, covered cells.
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord {
        // rows and columns are equal and bounded by `Coord`
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Iterates all cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    pub fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(Cell::is_mine)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_revealed() && !cell.is_mine())
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(Cell::is_flagged)
    }

    /// Whether every non-mine cell has been revealed; flags are irrelevant.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub fn all_mines_flagged(&self) -> bool {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .all(Cell::is_flagged)
    }

    /// Turns each listed cell into a mine. Coordinates must already be validated.
    pub(crate) fn place_mines(&mut self, mines: &[Coord2]) {
        for &coords in mines {
            self[coords].kind = CellKind::Mine;
        }
    }

    /// Classifies every remaining blank cell as numbered or empty.
    pub(crate) fn classify_blank_cells(&mut self) {
        let blanks: Vec<_> = self
            .iter()
            .filter(|(_, cell)| cell.kind.is_blank())
            .map(|(coords, _)| coords)
            .collect();

        for coords in blanks {
            self.classify(coords);
        }
    }

    /// Sets the kind of a safe cell from its real neighbour count.
    pub(crate) fn classify(&mut self, coords: Coord2) {
        let count = self.adjacent_mine_count(coords);
        self[coords].kind = CellKind::from_adjacent_mines(count);
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
