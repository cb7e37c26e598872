use crate::*;

/// Bonus per flag, paid out only once the board is cleared.
pub const FLAG_POINTS: Score = 20;

/// Highest score a board allows: every safe cell plus a bonus for every mine.
pub fn maximum_score(board: &Board, mine_count: CellCount) -> Score {
    Score::from(board.safe_cell_count()) + Score::from(mine_count) * FLAG_POINTS
}

/// Scores the board as it stands.
///
/// While the game is in progress only revealed safe cells count, so flags
/// cannot inflate the score. Once every safe cell is revealed, flags are paid
/// out: the maximum score if every mine carries one, otherwise
/// [`FLAG_POINTS`] per flagged cell.
pub fn compute_score(board: &Board, mine_count: CellCount) -> Score {
    let revealed = Score::from(board.revealed_safe_count());

    if !board.all_safe_revealed() {
        revealed
    } else if board.all_mines_flagged() {
        maximum_score(board, mine_count)
    } else {
        revealed + Score::from(board.flagged_count()) * FLAG_POINTS
    }
}
