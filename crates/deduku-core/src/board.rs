//! The puzzle board.

use std::str::FromStr;

use derive_more::{Display, Error, From};

use crate::{
    Action, Cell, CellId, GridView, Group, GroupId, GroupKind, Move, Origin, Shape, ShapeError,
    Value, ValueSet,
    rules::{self, RuleFn},
};

/// Errors produced when loading a board from digits or text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ParseBoardError {
    /// The cell count does not describe a square-of-a-square board.
    #[display("{_0}")]
    Shape(#[error(source)] ShapeError),
    /// A digit exceeds the board's value range.
    #[display("value {value} does not fit a board of size {size}")]
    #[from(skip)]
    ValueOutOfRange {
        /// The rejected digit.
        value: u8,
        /// The board's side length.
        size: usize,
    },
}

/// A sudoku board: the sole owner of its cells and groups.
///
/// Cells and groups live in flat arrays and reference each other by
/// [`CellId`] / [`GroupId`] only, which keeps the structure cycle-free and
/// cheap to snapshot. Groups are stored rows first, then columns, then
/// boxes.
///
/// Committed state is mutated in place through [`Board::apply_move`] (or the
/// lower-level [`set_value`](Board::set_value) /
/// [`block_values`](Board::block_values)); speculative evaluation never goes
/// through the board itself.
///
/// # Examples
///
/// ```
/// use deduku_core::{Board, CellId};
///
/// let board: Board = "
///     530 070 000
///     600 195 000
///     098 000 060
///     800 060 003
///     400 803 001
///     700 020 006
///     060 000 280
///     000 419 005
///     000 080 079
/// "
/// .parse()?;
///
/// assert!(board.is_valid());
/// assert!(!board.is_solved());
/// assert_eq!(board.cell(CellId::new(0)).value().map(|v| v.get()), Some(5));
/// # Ok::<(), deduku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    shape: Shape,
    cells: Vec<Cell>,
    groups: Vec<Group>,
    rules: Vec<RuleFn>,
}

impl Board {
    /// Builds a board from a flat, row-major digit sequence; `0` is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] if the length is not a square of a
    /// square, or if a digit exceeds the board's value range.
    pub fn from_digits(digits: &[u8]) -> Result<Self, ParseBoardError> {
        let shape = Shape::from_cell_count(digits.len())?;
        let size = shape.size();
        for &digit in digits {
            if usize::from(digit) > size {
                return Err(ParseBoardError::ValueOutOfRange {
                    value: digit,
                    size,
                });
            }
        }

        let cells = digits
            .iter()
            .enumerate()
            .map(|(index, &digit)| {
                let id = CellId::new(index);
                let groups = [
                    GroupId::new(shape.row_of(id)),
                    GroupId::new(size + shape.column_of(id)),
                    GroupId::new(2 * size + shape.box_of(id)),
                ];
                let value = (digit != 0).then(|| Value::new(digit));
                Cell::new(value, groups)
            })
            .collect();

        let mut groups = Vec::with_capacity(3 * size);
        for row in 0..size {
            let members = (0..size).map(|col| shape.cell_at(row, col)).collect();
            groups.push(Group::new(GroupKind::Row, row, members, size));
        }
        for col in 0..size {
            let members = (0..size).map(|row| shape.cell_at(row, col)).collect();
            groups.push(Group::new(GroupKind::Column, col, members, size));
        }
        let box_size = shape.box_size();
        for box_index in 0..size {
            let top = (box_index / box_size) * box_size;
            let left = (box_index % box_size) * box_size;
            let members = (0..size)
                .map(|i| shape.cell_at(top + i / box_size, left + i % box_size))
                .collect();
            groups.push(Group::new(GroupKind::Box, box_index, members, size));
        }

        Ok(Self {
            shape,
            cells,
            groups,
            rules: rules::standard_rules(),
        })
    }

    /// Returns the board's geometry.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns all cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell with the given id.
    #[inline]
    #[must_use]
    pub fn cell(&self, cell: CellId) -> &Cell {
        &self.cells[cell.index()]
    }

    /// Iterates over all cell ids in row-major order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId::new)
    }

    /// Returns all groups: rows, then columns, then boxes.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the group with the given id.
    #[inline]
    #[must_use]
    pub fn group(&self, group: GroupId) -> &Group {
        &self.groups[group.index()]
    }

    /// Iterates over all group ids: rows, then columns, then boxes.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> {
        (0..self.groups.len()).map(GroupId::new)
    }

    /// Returns the id of the given row group (0-based).
    #[inline]
    #[must_use]
    pub const fn row_group(&self, row: usize) -> GroupId {
        GroupId::new(row)
    }

    /// Returns the id of the given column group (0-based).
    #[inline]
    #[must_use]
    pub const fn column_group(&self, column: usize) -> GroupId {
        GroupId::new(self.shape.size() + column)
    }

    /// Returns the id of the given box group (0-based).
    #[inline]
    #[must_use]
    pub const fn box_group(&self, box_index: usize) -> GroupId {
        GroupId::new(2 * self.shape.size() + box_index)
    }

    /// Returns the rules the board evaluates candidates against.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[RuleFn] {
        &self.rules
    }

    /// Appends a rule to the board's rule list.
    ///
    /// The structural sudoku rule is always installed; additional rules
    /// merge their exclusions with it.
    pub fn add_rule(&mut self, rule: RuleFn) {
        self.rules.push(rule);
    }

    /// Returns a snapshot of the committed state for candidate queries.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(
            self,
            self.cells.iter().map(Cell::value).collect(),
            self.cells.iter().map(Cell::blocked).collect(),
        )
    }

    /// Returns the candidates of a cell: every value not excluded by a rule
    /// or a committed elimination. Empty once the cell holds a value.
    #[must_use]
    pub fn candidates_of(&self, cell: CellId) -> ValueSet {
        self.view().candidates(cell)
    }

    /// Returns `true` if no cell holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.value().is_none())
    }

    /// Returns `true` if every empty cell still has at least one candidate.
    #[must_use]
    pub fn is_possible(&self) -> bool {
        self.view().is_possible()
    }

    /// Returns `true` if the board is possible and no committed value
    /// conflicts with its own groups.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.view().is_valid()
    }

    /// Returns `true` if every cell holds a value and none conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.view().is_solved()
    }

    /// Serializes the committed values, row-major, `0` for blanks.
    ///
    /// Speculative moves never appear here; only values committed to the
    /// board are written. For boards larger than 9×9 values exceed one
    /// character and the output is not parseable back with [`FromStr`];
    /// such boards round-trip through [`Board::from_digits`] instead.
    #[must_use]
    pub fn to_digit_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            match cell.value() {
                None => out.push('0'),
                Some(value) if value.get() <= 9 => out.push(char::from(b'0' + value.get())),
                Some(value) => out.push_str(&value.get().to_string()),
            }
        }
        out
    }

    /// Returns a human-readable cell name: row letter plus 1-based column,
    /// e.g. `"A1"` for the top-left cell.
    #[must_use]
    pub fn cell_name(&self, cell: CellId) -> String {
        let row = self.shape.row_of(cell);
        let column = self.shape.column_of(cell);
        format!("{}{}", row_label(row), column + 1)
    }

    /// Commits a value to a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is a given (the original puzzle is immutable) or
    /// if the value exceeds the board's range. Both are caller bugs, not
    /// puzzle states.
    pub fn set_value(&mut self, cell: CellId, value: Value, origin: Origin) {
        assert!(
            usize::from(value.get()) <= self.shape.size(),
            "value {value} does not fit a board of size {}",
            self.shape.size()
        );
        let name = self.cell_name(cell);
        let slot = &mut self.cells[cell.index()];
        assert!(
            !slot.is_given(),
            "cannot set the value of given cell {name}"
        );
        slot.value = Some(value);
        slot.origin = origin;
    }

    /// Commits a candidate elimination to a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell already holds a value, or if none of `values` is
    /// a live candidate of the cell. Moves whose eliminations may have
    /// lapsed should go through [`Board::apply_move`], which drops them
    /// silently instead.
    pub fn block_values(&mut self, cell: CellId, values: ValueSet) {
        let name = self.cell_name(cell);
        assert!(
            self.cells[cell.index()].value().is_none(),
            "cannot block candidates of {name}: the cell already holds a value"
        );
        let live = self.view().candidates(cell);
        assert!(
            !live.intersection(values).is_empty(),
            "blocked values {values:?} are not live candidates of {name}"
        );
        self.cells[cell.index()].blocked |= values;
    }

    /// Commits a move, returning the cells that actually changed.
    ///
    /// A `Set` fills its cell with [`Origin::Deduced`]. A `Block` is applied
    /// cell by cell; targets whose current candidates no longer overlap the
    /// blocked values (including cells that have since been filled) are
    /// skipped without error.
    ///
    /// # Panics
    ///
    /// Panics if a `Set` targets a given cell.
    pub fn apply_move(&mut self, mv: &Move) -> Vec<CellId> {
        match mv.action() {
            Action::Set { cell, value } => {
                self.set_value(*cell, *value, Origin::Deduced(mv.technique()));
                vec![*cell]
            }
            Action::Block { cells, values } => {
                let mut affected = Vec::new();
                for &cell in cells {
                    let live = self.view().candidates(cell);
                    if live.intersection(*values).is_empty() {
                        continue;
                    }
                    self.block_values(cell, *values);
                    affected.push(cell);
                }
                affected
            }
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a flat digit string: whitespace is ignored and any other
    /// non-digit character is read as a blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_digit(10).map_or(0, |d| u8::try_from(d).unwrap_or(0)))
            .collect();
        Self::from_digits(&digits)
    }
}

/// Spreadsheet-style row labels: `A` to `Z`, then `AA`, `AB`, and so on.
fn row_label(row: usize) -> String {
    let mut indices = Vec::new();
    let mut n = row;
    loop {
        indices.push(n % 26);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    indices
        .into_iter()
        .rev()
        .map(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            char::from(b'A' + i)
        })
        .collect()
}
