use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Running (first reveal)
/// - NotStarted -> Won (first reveal clears the board)
/// - Running -> Won
/// - Running -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board is blank, mines are placed by the first reveal
    NotStarted,
    Running,
    /// Every safe cell has been revealed
    Won,
    /// A mine has been revealed
    Lost,
}

impl GamePhase {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One game session: the board, its counters and the placement strategy.
///
/// Moves are not blocked once the game has ended; the caller is expected to
/// stop forwarding input after [`GamePhase::is_finished`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState<G = RandomMineGenerator> {
    config: GameConfig,
    board: Board,
    generator: G,
    move_count: u32,
    score: Score,
    flag_count: Saturating<CellCount>,
    phase: GamePhase,
    triggered_mine: Option<Coord2>,
}

impl GameState {
    /// New game with randomly placed mines, reproducible through `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn from_difficulty(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty.config(), seed)
    }
}

impl<G: MineGenerator> GameState<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            board: Board::new(config.size),
            generator,
            move_count: 0,
            score: 0,
            flag_count: Saturating(0),
            phase: GamePhase::NotStarted,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count.0
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flag_count.0)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    /// Reveals one cell and returns its new state.
    ///
    /// The first reveal of a game places the mines around the chosen cell, so
    /// it is always safe. Revealing an already revealed cell changes nothing.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;

        if self.board[coords].is_revealed() {
            return Ok(self.board[coords]);
        }

        if self.move_count == 0 {
            self.fill_board(coords)?;
            self.move_count += 1;
            self.set_phase(GamePhase::Running);
            self.recompute_score();
        } else if self.board[coords].is_mine() {
            self.reveal_at(coords);
            self.triggered_mine = Some(coords);
            self.set_phase(GamePhase::Lost);
        } else {
            self.reveal_at(coords);
            self.move_count += 1;
            self.recompute_score();
        }

        Ok(self.board[coords])
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        let cell = &mut self.board[coords];

        Ok(match (cell.revealed, cell.flagged) {
            (true, _) => {
                log::warn!("Rejected flag toggle on revealed cell {:?}", coords);
                Rejected
            }
            (false, false) => {
                cell.flagged = true;
                self.flag_count += 1;
                Set
            }
            (false, true) => {
                cell.flagged = false;
                self.flag_count -= 1;
                Unset
            }
        })
    }

    /// Flood-fills from `coords`, revealing the connected empty region and the
    /// numbered cells bordering it. Mines are never revealed.
    ///
    /// Returns every cell revealed by the fill, `coords` included.
    pub fn clear_adjacent_cells(&mut self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        let coords = self.board.validate_coords(coords)?;
        if self.move_count == 0 {
            return Err(GameError::NotStarted);
        }

        let mut revealed = BTreeSet::new();
        let mut to_visit: Vec<Coord2> = Vec::from([coords]);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = self.board[visit_coords];
            if revealed.contains(&visit_coords) || cell.is_mine() {
                continue;
            }
            debug_assert!(
                !cell.kind().is_blank(),
                "unclassified cell {visit_coords:?} on a filled board"
            );

            self.reveal_at(visit_coords);
            revealed.insert(visit_coords);

            if cell.kind().is_empty() {
                to_visit.extend(self.board.iter_neighbors(visit_coords).filter(|&pos| {
                    let neighbor = self.board[pos];
                    !neighbor.is_mine() && !neighbor.is_revealed()
                }));
            }
        }

        self.recompute_score();
        Ok(revealed)
    }

    /// Whether every non-mine cell has been revealed.
    pub fn check_for_win(&self) -> bool {
        self.board.all_safe_revealed()
    }

    /// Places the mines and classifies the board around the first revealed
    /// cell. Works on a copy so a generator error leaves the game untouched.
    fn fill_board(&mut self, start: Coord2) -> Result<()> {
        let mut board = self.board.clone();
        board[start].kind = CellKind::Empty;

        let mines = self.generator.generate(&board, self.config.mines)?;
        board.place_mines(&mines);
        board.classify_blank_cells();
        // `Empty` only kept the start cell out of placement
        board.classify(start);

        if board[start].reveal() {
            self.flag_count -= 1;
        }
        self.board = board;

        log::debug!(
            "Filled {}x{} board with {} mines, first reveal at {:?}",
            self.config.size,
            self.config.size,
            mines.len(),
            start
        );
        Ok(())
    }

    fn reveal_at(&mut self, coords: Coord2) {
        if self.board[coords].reveal() {
            self.flag_count -= 1;
        }
    }

    fn recompute_score(&mut self) {
        self.score = compute_score(&self.board, self.config.mines);

        if self.phase.is_running() && self.check_for_win() {
            self.set_phase(GamePhase::Won);
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::debug!("Game phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
