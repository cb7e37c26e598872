use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be at least one cell")]
    InvalidSize,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine cannot be placed on that cell")]
    InvalidMinePlacement,
    #[error("Mine layout does not match the requested mine count")]
    MineCountMismatch,
    #[error("Cannot change the flag of a revealed cell")]
    InvalidFlagTransition,
    #[error("Board has not been filled yet, reveal a cell first")]
    NotStarted,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
