//! Example demonstrating technique-based solving.
//!
//! This example shows how to:
//! - Parse a board from a flat digit string
//! - Run the technique pipeline to the end, or preview the chain without
//!   committing it
//! - Display each move with its human-readable rationale
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     530070000600195000098000060800060003400803001700020006060000280000419005000080079
//! ```
//!
//! Preview the deduction chain without mutating the board:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --dry-run <PUZZLE>
//! ```
//!
//! Set `RUST_LOG=debug` to see each committed move as it is applied.

use std::process;

use clap::Parser;
use deduku_core::Board;
use deduku_game::Game;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle as a row-major digit string; 0 or any non-digit is blank.
    puzzle: String,

    /// Evaluate the deduction chain speculatively instead of committing it.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board: Board = match args.puzzle.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Failed to parse puzzle: {err}");
            process::exit(2);
        }
    };

    let mut game = Game::new(board);

    if args.dry_run {
        let (outcome, moves) = match game.check_solutions() {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };
        println!("Outcome: {outcome}");
        for mv in &moves {
            println!("  {}", mv.describe(game.board(), &mv.target_cells()));
        }
        return;
    }

    loop {
        match game.step_solve() {
            Ok(Some(mv)) => {
                println!("{}", mv.describe(game.board(), &mv.target_cells()));
            }
            Ok(None) => break,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        if game.board().is_solved() {
            break;
        }
    }

    println!();
    if game.board().is_solved() {
        println!("Solved: {}", game.board().to_digit_string());
    } else {
        println!("Stuck at: {}", game.board().to_digit_string());
    }
}
