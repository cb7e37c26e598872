use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Empty,
    Numbered(u8),
    Mine,
}

impl CellView {
    /// Projects a cell, hiding what the player has not uncovered unless
    /// `uncover` is set.
    pub fn of(cell: &Cell, uncover: bool) -> Self {
        if !cell.is_revealed() && !uncover {
            return if cell.is_flagged() {
                Self::Flagged
            } else {
                Self::Hidden
            };
        }

        match cell.kind() {
            CellKind::Blank => Self::Hidden,
            CellKind::Empty => Self::Empty,
            CellKind::Numbered(count) => Self::Numbered(count),
            CellKind::Mine => Self::Mine,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Empty => '.',
            Self::Numbered(count) => match char::from_digit(count as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
            Self::Mine => '*',
        }
    }
}

/// Snapshot of the board for a presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub cells: Array2<CellView>,
}

impl BoardView {
    /// What the player currently sees.
    pub fn from_game<G: MineGenerator>(game: &GameState<G>) -> Self {
        Self::project(game.board(), false)
    }

    /// Every cell uncovered, as shown once the game is over.
    pub fn uncovered<G: MineGenerator>(game: &GameState<G>) -> Self {
        Self::project(game.board(), true)
    }

    fn project(board: &Board, uncover: bool) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem((size, size).to_nd_index(), CellView::Hidden);
        for (coords, cell) in board.iter() {
            cells[coords.to_nd_index()] = CellView::of(cell, uncover);
        }

        Self { size, cells }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<G: MineGenerator> GameState<G> {
    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        Ok(CellView::of(&self.cell_at(coords)?, false))
    }
}
