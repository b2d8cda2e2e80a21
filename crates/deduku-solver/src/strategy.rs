//! The ordered technique pipeline.

use derive_more::{Display, Error};
use log::trace;

use deduku_core::{GridView, Move};

use crate::technique::{self, BoxedTechnique};

/// Errors produced when searching for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    /// The board is invalid; deducing further would build on a
    /// contradiction.
    #[display("cannot search for a move: the board is invalid")]
    InvalidBoard,
}

/// Runs techniques in priority order and returns the first move found.
///
/// The finder is stateless between calls; each search starts again from the
/// highest-priority technique, so cheap deductions always win over
/// expensive ones. It works against any [`GridView`], whether the committed
/// board or a speculative overlay, and never mutates either.
///
/// # Examples
///
/// ```
/// use deduku_core::Board;
/// use deduku_solver::StrategyFinder;
///
/// let board: Board = "0".repeat(81).parse()?;
/// let finder = StrategyFinder::with_all_techniques();
///
/// // An open board offers no deduction.
/// assert!(finder.find_move(&board.view())?.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategyFinder {
    techniques: Vec<BoxedTechnique>,
}

impl StrategyFinder {
    /// Creates a finder with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a finder with every technique, easiest first.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Returns the first move any technique can justify.
    ///
    /// Returns `Ok(None)` when no technique applies; this is a normal
    /// "stuck" outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidBoard`] if the view is invalid; the
    /// pipeline refuses to deduce from a contradictory position.
    pub fn find_move(&self, grid: &GridView<'_>) -> Result<Option<Move>, StrategyError> {
        if !grid.is_valid() {
            return Err(StrategyError::InvalidBoard);
        }
        for technique in &self.techniques {
            if let Some(mv) = technique.find_move(grid) {
                trace!("{} found a move", technique.name());
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }
}

impl Default for StrategyFinder {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}
