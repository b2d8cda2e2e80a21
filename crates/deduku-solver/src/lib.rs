//! Human-style deduction techniques for the deduku engine.
//!
//! This crate provides the ordered library of solving techniques and the
//! machinery they share:
//!
//! - [`technique`]: the [`Technique`] trait and the seven implementations,
//!   from solved squares up to Y-Wings
//! - [`cover`]: the covered-union search underlying both naked and hidden
//!   set detection
//! - [`strategy`]: [`StrategyFinder`], the priority pipeline that returns
//!   the first applicable move
//! - [`testing`]: a harness for writing technique tests
//!
//! Techniques are pure: they read a [`GridView`](deduku_core::GridView) and
//! return a [`Move`](deduku_core::Move) without touching any state, so the
//! same pipeline serves committed boards and speculative overlays alike.
//!
//! # Examples
//!
//! ```
//! use deduku_core::Board;
//! use deduku_solver::StrategyFinder;
//!
//! let board: Board = format!("{}123456780", "0".repeat(72)).parse()?;
//! let finder = StrategyFinder::with_all_techniques();
//! let mv = finder.find_move(&board.view())?.expect("one cell left");
//! println!("{}", mv.describe(&board, &mv.target_cells()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cover;
pub mod strategy;
pub mod technique;
pub mod testing;

pub use self::{
    strategy::{StrategyError, StrategyFinder},
    technique::{BoxedTechnique, Technique},
};
