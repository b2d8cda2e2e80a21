//! Board geometry.

use derive_more::{Display, Error};

use crate::{CellId, Value, ValueSet};

/// The geometry of a square board whose side length is itself a perfect
/// square (4, 9, 16, 25, and so on).
///
/// A shape is always valid once constructed; malformed cell counts are
/// rejected with [`ShapeError`] at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    box_size: u8,
}

/// Errors produced when validating a board's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// The cell count is not the fourth power of an integer.
    #[display("invalid board length: {cell_count}")]
    InvalidCellCount {
        /// The rejected cell count.
        cell_count: usize,
    },
    /// The side length exceeds what the value bitsets can represent.
    #[display("board size {size} exceeds the supported maximum of {}", Shape::MAX_SIZE)]
    TooLarge {
        /// The rejected side length.
        size: usize,
    },
}

impl Shape {
    /// The largest supported side length.
    pub const MAX_SIZE: u8 = Value::MAX;

    /// Creates a shape from a side length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `size` is not a perfect square or exceeds
    /// [`Shape::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, ShapeError> {
        let Some(box_size) = integer_sqrt(size) else {
            return Err(ShapeError::InvalidCellCount {
                cell_count: size * size,
            });
        };
        if size > usize::from(Self::MAX_SIZE) {
            return Err(ShapeError::TooLarge { size });
        }
        #[expect(clippy::cast_possible_truncation)]
        let (size, box_size) = (size as u8, box_size as u8);
        Ok(Self { size, box_size })
    }

    /// Creates a shape from a flat cell count.
    ///
    /// The count must be the fourth power of an integer: 16 cells for a 4×4
    /// board, 81 for 9×9, 256 for 16×16, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] for any other count.
    pub fn from_cell_count(cell_count: usize) -> Result<Self, ShapeError> {
        let size = integer_sqrt(cell_count).ok_or(ShapeError::InvalidCellCount { cell_count })?;
        if integer_sqrt(size).is_none() {
            return Err(ShapeError::InvalidCellCount { cell_count });
        }
        Self::new(size)
    }

    /// Returns `true` if `cell_count` describes a well-formed board.
    #[must_use]
    pub fn valid_cell_count(cell_count: usize) -> bool {
        Self::from_cell_count(cell_count).is_ok()
    }

    /// Returns the side length.
    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        self.size as usize
    }

    /// Returns the side length of a box.
    #[inline]
    #[must_use]
    pub const fn box_size(self) -> usize {
        self.box_size as usize
    }

    /// Returns the total number of cells.
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.size() * self.size()
    }

    /// Returns the full set of placeable values, `1..=size`.
    #[inline]
    #[must_use]
    pub const fn value_set(self) -> ValueSet {
        ValueSet::full(self.size)
    }

    /// Iterates over the placeable values in ascending order.
    #[inline]
    pub fn values(self) -> impl Iterator<Item = Value> {
        (1..=self.size).map(Value::new)
    }

    /// Returns the row of a cell (0-based).
    #[inline]
    #[must_use]
    pub const fn row_of(self, cell: CellId) -> usize {
        cell.index() / self.size()
    }

    /// Returns the column of a cell (0-based).
    #[inline]
    #[must_use]
    pub const fn column_of(self, cell: CellId) -> usize {
        cell.index() % self.size()
    }

    /// Returns the box index of a cell (0-based, left to right, top to
    /// bottom).
    #[inline]
    #[must_use]
    pub const fn box_of(self, cell: CellId) -> usize {
        let row_band = self.row_of(cell) / self.box_size();
        let col_band = self.column_of(cell) / self.box_size();
        row_band * self.box_size() + col_band
    }

    /// Returns the cell at the given 0-based coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn cell_at(self, row: usize, column: usize) -> CellId {
        assert!(
            row < self.size() && column < self.size(),
            "coordinates ({row}, {column}) out of range for a {}x{} board",
            self.size(),
            self.size()
        );
        CellId::new(row * self.size() + column)
    }
}

/// Returns the exact integer square root of `n`, if `n` is a perfect square.
fn integer_sqrt(n: usize) -> Option<usize> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can land one off on either side.
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n && root > 0).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_shapes() {
        for (count, size, box_size) in [(16, 4, 2), (81, 9, 3), (256, 16, 4), (625, 25, 5)] {
            let shape = Shape::from_cell_count(count).unwrap();
            assert_eq!(shape.size(), size);
            assert_eq!(shape.box_size(), box_size);
            assert_eq!(shape.cell_count(), count);
            assert!(Shape::valid_cell_count(count));
        }
    }

    #[test]
    fn test_invalid_cell_counts() {
        for count in [0, 36, 80, 82, 100, 144] {
            assert_eq!(
                Shape::from_cell_count(count),
                Err(ShapeError::InvalidCellCount { cell_count: count }),
                "cell count {count}"
            );
            assert!(!Shape::valid_cell_count(count));
        }
    }

    #[test]
    fn test_too_large() {
        // 81^2 = 6561 cells: a square of a square, but beyond bitset capacity.
        assert_eq!(
            Shape::from_cell_count(6561),
            Err(ShapeError::TooLarge { size: 81 })
        );
    }

    #[test]
    fn test_coordinates() {
        let shape = Shape::from_cell_count(81).unwrap();
        let cell = shape.cell_at(4, 7);
        assert_eq!(cell.index(), 43);
        assert_eq!(shape.row_of(cell), 4);
        assert_eq!(shape.column_of(cell), 7);
        assert_eq!(shape.box_of(cell), 5);
    }

    #[test]
    fn test_value_set() {
        let shape = Shape::from_cell_count(16).unwrap();
        assert_eq!(shape.value_set().len(), 4);
        assert_eq!(shape.values().count(), 4);
    }
}
