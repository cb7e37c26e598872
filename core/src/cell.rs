use serde::{Deserialize, Serialize};

/// What a cell holds once the board has been classified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Not yet classified, the board is still waiting for its first reveal.
    Blank,
    /// Safe cell without adjacent mines.
    Empty,
    /// Safe cell with `1..=8` adjacent mines.
    Numbered(u8),
    Mine,
}

impl CellKind {
    /// Classifies a safe cell by the number of mines around it.
    pub const fn from_adjacent_mines(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Numbered(count)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Blank
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    /// Number of mines around this cell, known only for classified safe cells.
    pub const fn adjacent_mine_count(&self) -> Option<u8> {
        match self.kind {
            CellKind::Empty => Some(0),
            CellKind::Numbered(count) => Some(count),
            CellKind::Blank | CellKind::Mine => None,
        }
    }

    /// Marks the cell revealed, dropping any flag on it.
    pub(crate) fn reveal(&mut self) -> bool {
        let was_flagged = self.flagged;
        self.revealed = true;
        self.flagged = false;
        was_flagged
    }
}
