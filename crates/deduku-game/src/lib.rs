//! Session layer for the deduku deduction engine.
//!
//! This crate ties the board model and the technique pipeline together:
//!
//! - [`session`]: [`Game`], the caller-owned solving session with its three
//!   loops: one hint ([`Game::step_solve`]), solve to the end
//!   ([`Game::solve`]), and a speculative dry run
//!   ([`Game::check_solutions`])
//! - [`overlay`]: [`Overlay`], the disposable projection that evaluates a
//!   queued deduction chain without committing it
//!
//! The UI that renders boards, hints, and histories is an external
//! collaborator; everything here is synchronous, single-threaded, and free
//! of ambient state.
//!
//! # Examples
//!
//! ```
//! use deduku_core::Board;
//! use deduku_game::Game;
//!
//! let board: Board = format!("{}123456780", "0".repeat(72)).parse()?;
//! let mut game = Game::new(board);
//!
//! let outcome = game.solve()?;
//! assert!(outcome.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod overlay;
pub mod session;

pub use self::{
    overlay::Overlay,
    session::{Game, SolveOutcome},
};
