//! Speculative move evaluation.

use deduku_core::{Action, Board, Cell, GridView, Move};

/// A board plus a queue of pending, uncommitted moves.
///
/// The overlay never mutates the board. Each call to [`Overlay::view`]
/// recomputes a fresh [`GridView`] from the board and the queue, so the
/// projection is always consistent with whatever has been queued; no
/// parallel board is ever materialized. Overlays are short-lived: build
/// one, evaluate a deduction chain against it, and drop it.
///
/// For a cell targeted by several pending `Set` moves, the most recent one
/// wins; the committed value is used only when no pending `Set` targets the
/// cell.
#[derive(Debug, Clone)]
pub struct Overlay<'a> {
    board: &'a Board,
    pending: Vec<Move>,
}

impl<'a> Overlay<'a> {
    /// Creates an overlay with an empty move queue.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            pending: Vec::new(),
        }
    }

    /// Returns the underlying board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns the queued moves, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[Move] {
        &self.pending
    }

    /// Appends a move to the queue without committing it.
    pub fn push(&mut self, mv: Move) {
        self.pending.push(mv);
    }

    /// Consumes the overlay and returns the queued moves.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.pending
    }

    /// Recomputes the speculative projection of the board.
    ///
    /// # Panics
    ///
    /// Panics with a not-implemented message if the queue contains a
    /// `Block` move; candidate evaluation over pending eliminations is not
    /// implemented.
    #[must_use]
    pub fn view(&self) -> GridView<'a> {
        let mut values: Vec<_> = self.board.cells().iter().map(Cell::value).collect();
        for mv in &self.pending {
            match mv.action() {
                Action::Set { cell, value } => values[cell.index()] = Some(*value),
                Action::Block { .. } => unimplemented!(
                    "candidate evaluation over pending elimination moves"
                ),
            }
        }
        GridView::new(
            self.board,
            values,
            self.board.cells().iter().map(Cell::blocked).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use deduku_core::{CellId, Rationale, TechniqueKind, Value, ValueSet};

    use super::*;

    fn set_move(cell: CellId, value: u8) -> Move {
        let value = Value::new(value);
        Move::set(
            TechniqueKind::SolvedSquare,
            cell,
            value,
            Rationale::SolvedSquare { cell, value },
        )
    }

    fn empty_board() -> Board {
        Board::from_digits(&[0; 81]).unwrap()
    }

    #[test]
    fn test_pending_set_shows_through() {
        let board = empty_board();
        let mut overlay = Overlay::new(&board);
        overlay.push(set_move(CellId::new(0), 5));

        let view = overlay.view();
        assert_eq!(view.value(CellId::new(0)), Some(Value::new(5)));
        // The rule engine sees the speculative value: 5 leaves the row.
        assert!(!view.candidates(CellId::new(1)).contains(Value::new(5)));
        // The real board is untouched.
        assert_eq!(board.cell(CellId::new(0)).value(), None);
    }

    #[test]
    fn test_most_recent_pending_set_wins() {
        let board = empty_board();
        let mut overlay = Overlay::new(&board);
        overlay.push(set_move(CellId::new(0), 5));
        overlay.push(set_move(CellId::new(0), 6));

        let view = overlay.view();
        assert_eq!(view.value(CellId::new(0)), Some(Value::new(6)));
    }

    #[test]
    fn test_committed_value_is_fallback() {
        let mut digits = [0u8; 81];
        digits[7] = 4;
        let board = Board::from_digits(&digits).unwrap();
        let overlay = Overlay::new(&board);
        assert_eq!(overlay.view().value(CellId::new(7)), Some(Value::new(4)));
    }

    #[test]
    #[should_panic(expected = "not implemented")]
    fn test_pending_block_fails_loudly() {
        let board = empty_board();
        let mut overlay = Overlay::new(&board);
        overlay.push(Move::block(
            TechniqueKind::NakedSet,
            vec![CellId::new(0)],
            ValueSet::from_elem(Value::new(1)),
            Rationale::NakedSet {
                group: deduku_core::GroupId::new(0),
                values: ValueSet::from_elem(Value::new(1)),
                owners: vec![CellId::new(1)],
            },
        ));
        let _ = overlay.view();
    }
}
