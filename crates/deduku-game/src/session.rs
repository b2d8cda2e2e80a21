//! Game sessions and solve loops.

use derive_more::{Display, IsVariant};
use log::debug;

use deduku_core::{Board, CellId, Move};
use deduku_solver::{StrategyError, StrategyFinder};

use crate::Overlay;

/// How a solve loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SolveOutcome {
    /// Every cell is filled and consistent.
    #[display("solved")]
    Solved,
    /// No technique could make further progress.
    #[display("stuck")]
    Stuck,
    /// The board reached a contradictory state.
    #[display("invalid")]
    Invalid,
}

/// A solving session: a board paired with a technique pipeline.
///
/// The session is an explicit context object owned by the caller; there is
/// no ambient current-game state. It drives the pipeline against the
/// committed board ([`step_solve`](Game::step_solve),
/// [`solve`](Game::solve)) or against a speculative [`Overlay`]
/// ([`check_solutions`](Game::check_solutions)), and commits moves back to
/// the board as they are found.
///
/// # Examples
///
/// ```
/// use deduku_core::Board;
/// use deduku_game::Game;
///
/// let board: Board = "0".repeat(81).parse()?;
/// let mut game = Game::new(board);
///
/// // An open board offers no deduction: the loop reports it is stuck.
/// assert!(game.solve()?.is_stuck());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    finder: StrategyFinder,
}

impl Game {
    /// Creates a session with the full technique pipeline.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_finder(board, StrategyFinder::with_all_techniques())
    }

    /// Creates a session with a caller-supplied pipeline.
    #[must_use]
    pub fn with_finder(board: Board, finder: StrategyFinder) -> Self {
        Self { board, finder }
    }

    /// Returns the board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the technique pipeline.
    #[inline]
    #[must_use]
    pub fn finder(&self) -> &StrategyFinder {
        &self.finder
    }

    /// Consumes the session and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Commits a move to the board, returning the cells actually changed.
    ///
    /// # Panics
    ///
    /// Panics if the move violates a board contract, such as setting a
    /// given cell.
    pub fn apply_move(&mut self, mv: &Move) -> Vec<CellId> {
        let affected = self.board.apply_move(mv);
        debug!(
            "{}: {}",
            mv.technique(),
            mv.describe(&self.board, &affected)
        );
        affected
    }

    /// Finds one move against the committed board and, if found, commits
    /// it, giving a single hint.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidBoard`] if the board is invalid.
    pub fn step_solve(&mut self) -> Result<Option<Move>, StrategyError> {
        let mv = self.finder.find_move(&self.board.view())?;
        if let Some(mv) = &mv {
            let _ = self.apply_move(mv);
        }
        Ok(mv)
    }

    /// Repeatedly finds and commits moves until the board is solved, no
    /// technique applies, or the board turns invalid.
    ///
    /// The loop is bounded by one iteration per cell; a pipeline that kept
    /// returning movable-but-non-progressing moves would otherwise spin
    /// forever, so hitting the bound reports `Stuck`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidBoard`] only if the board turns
    /// invalid in the middle of a search; invalidity seen between moves is
    /// reported as [`SolveOutcome::Invalid`].
    pub fn solve(&mut self) -> Result<SolveOutcome, StrategyError> {
        let limit = self.board.shape().cell_count();
        for _ in 0..limit {
            if self.board.is_solved() {
                return Ok(SolveOutcome::Solved);
            }
            if !self.board.is_valid() {
                return Ok(SolveOutcome::Invalid);
            }
            let Some(mv) = self.finder.find_move(&self.board.view())? else {
                return Ok(SolveOutcome::Stuck);
            };
            let _ = self.apply_move(&mv);
        }
        if self.board.is_solved() {
            Ok(SolveOutcome::Solved)
        } else if self.board.is_valid() {
            Ok(SolveOutcome::Stuck)
        } else {
            Ok(SolveOutcome::Invalid)
        }
    }

    /// Dry-runs the deduction chain against an overlay, never touching the
    /// board, and returns how the chain ended together with the moves it
    /// queued.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidBoard`] if a search runs against an
    /// invalid projection.
    ///
    /// # Panics
    ///
    /// Panics if the chain queues an elimination move: evaluating
    /// candidates over pending eliminations is not implemented (see
    /// [`Overlay::view`]). Boards whose chains need only placements run to
    /// completion.
    pub fn check_solutions(&self) -> Result<(SolveOutcome, Vec<Move>), StrategyError> {
        let mut overlay = Overlay::new(&self.board);
        loop {
            let view = overlay.view();
            if view.is_solved() {
                return Ok((SolveOutcome::Solved, overlay.into_moves()));
            }
            if !view.is_valid() {
                return Ok((SolveOutcome::Invalid, overlay.into_moves()));
            }
            match self.finder.find_move(&view)? {
                Some(mv) => overlay.push(mv),
                None => return Ok((SolveOutcome::Stuck, overlay.into_moves())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use deduku_core::{Action, CellId, TechniqueKind, Value};

    use super::*;

    const SOLUTION: &str = "\
        123456789\
        456789123\
        789123456\
        231564897\
        564897231\
        897231564\
        312645978\
        645978312\
        978312645";

    fn board_from(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn blank_cells(text: &str, cells: &[(usize, usize)]) -> String {
        let mut digits: Vec<u8> = text.bytes().collect();
        for &(row, col) in cells {
            digits[row * 9 + col] = b'0';
        }
        String::from_utf8(digits).unwrap()
    }

    #[test]
    fn test_last_cell_hint() {
        // Every peer of (0, 4) holds a value; only 5 fits.
        let puzzle = blank_cells(SOLUTION, &[(0, 4)]);
        let mut game = Game::new(board_from(&puzzle));

        let mv = game.step_solve().unwrap().expect("a move exists");
        assert_eq!(mv.technique(), TechniqueKind::SolvedSquare);
        assert!(matches!(
            mv.action(),
            Action::Set { cell, value }
                if *cell == CellId::new(4) && *value == Value::new(5)
        ));
        assert!(game.board().is_solved());
    }

    #[test]
    fn test_solve_fills_scattered_blanks() {
        let holes = [
            (0, 0),
            (1, 3),
            (2, 6),
            (3, 1),
            (4, 4),
            (5, 7),
            (6, 2),
            (7, 5),
            (8, 8),
        ];
        let puzzle = blank_cells(SOLUTION, &holes);
        let mut game = Game::new(board_from(&puzzle));

        assert!(game.solve().unwrap().is_solved());
        assert_eq!(game.board().to_digit_string(), SOLUTION);
    }

    #[test]
    fn test_check_solutions_leaves_board_untouched() {
        let holes = [(0, 0), (4, 4), (8, 8)];
        let puzzle = blank_cells(SOLUTION, &holes);
        let game = Game::new(board_from(&puzzle));

        let (outcome, moves) = game.check_solutions().unwrap();
        assert!(outcome.is_solved());
        assert_eq!(moves.len(), 3);
        assert!(moves
            .iter()
            .all(|mv| matches!(mv.action(), Action::Set { .. })));
        assert_eq!(game.board().to_digit_string(), puzzle);
    }

    #[test]
    fn test_open_board_is_stuck() {
        let mut game = Game::new(board_from(&"0".repeat(81)));
        assert!(game.solve().unwrap().is_stuck());
        assert_eq!(game.check_solutions().unwrap().0, SolveOutcome::Stuck);
    }

    #[test]
    fn test_conflicting_givens_report_invalid() {
        let mut digits = [0u8; 81];
        digits[0] = 7;
        digits[5] = 7;
        let board = Board::from_digits(&digits).unwrap();

        let mut game = Game::new(board);
        assert!(game.solve().unwrap().is_invalid());
        // A direct hint request hits the pipeline precondition instead.
        assert_eq!(game.step_solve(), Err(StrategyError::InvalidBoard));
    }

    #[test]
    fn test_check_solutions_reports_invalid_board() {
        let mut digits = [0u8; 81];
        digits[0] = 7;
        digits[5] = 7;
        let game = Game::new(Board::from_digits(&digits).unwrap());
        let (outcome, moves) = game.check_solutions().unwrap();
        assert!(outcome.is_invalid());
        assert!(moves.is_empty());
    }
}
