//! Core data structures for the deduku deduction engine.
//!
//! This crate owns the puzzle model and everything derived from it:
//!
//! 1. **Geometry and values**
//!    - [`shape`]: board geometry (side length a perfect square) and its
//!      validation
//!    - [`value`]: cell values and value sets
//!    - [`small_set`]: the generic bitset behind every set in the crate,
//!      parameterized by [`SetSemantics`]
//! 2. **The board**
//!    - [`cell`] / [`group`]: cells and groups, referenced by id from flat,
//!      board-owned arrays
//!    - [`board`]: construction, serialization, committed-state mutation
//! 3. **Derived state**
//!    - [`rules`]: the open rule list mapping a cell to its excluded values
//!    - [`view`]: [`GridView`], the on-demand candidate projection shared by
//!      the committed board and speculative overlays
//! 4. **Deductions**
//!    - [`moves`]: the [`Move`] model (`Set`/`Block`), technique tags, and
//!      lazily rendered rationales
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Board, CellId, Value};
//!
//! let text = format!("4{}", "0".repeat(80));
//! let board: Board = text.parse()?;
//! let candidates = board.candidates_of(CellId::new(1));
//! assert!(!candidates.contains(Value::new(4))); // 4 is taken in the row
//! # Ok::<(), deduku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod group;
pub mod moves;
pub mod rules;
pub mod shape;
pub mod small_set;
pub mod value;
pub mod view;

pub use self::{
    board::{Board, ParseBoardError},
    cell::{Cell, CellId, Origin},
    group::{Group, GroupId, GroupKind},
    moves::{Action, Move, Rationale, TechniqueKind},
    rules::{InvalidValues, RuleFn},
    shape::{Shape, ShapeError},
    small_set::{SetSemantics, SmallSet},
    value::{Value, ValueSemantics, ValueSet},
    view::{CandidateOwners, GridView},
};
