//! # Eight Puzzle Library
//!
//! This library models the 3x3 sliding-tile puzzle as a state-space search
//! problem and compares three search strategies on it: breadth-first search,
//! depth-limited depth-first search and A* with two admissible heuristics.
//!
//! It is used by three binaries:
//! - `eight_puzzle`: Runs interpreter commands interactively or from a batch file.
//! - `solver`: Takes a state and a strategy on the command line and prints the solution.
//! - `strategy_evaluator`: Averages every strategy over many seeded scrambles.
//!
//! ## Modules
//! - `engine`: The puzzle state (`State`), moves (`Move`), successor generation
//!   and the scrambling session state (`Puzzle`).
//! - `heuristics`: Misplaced-tile and Manhattan-distance estimates for A*.
//! - `solver`: The `search` entry point and its three strategies.
//! - `branching`: Effective branching factor of a finished search.
//! - `comparison`: Runs all strategies on one state for side-by-side figures.
//! - `report`: Text rendering of search results and comparison tables.
//! - `command`: The line-oriented command interpreter.
//! - `utils`: Parsing states from text.
//! - `error`: The crate error type.
//!
//! The search core (`engine`, `heuristics`, `solver`, `branching`,
//! `comparison`) performs no I/O.

pub mod branching;
pub mod command;
pub mod comparison;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod report;
pub mod solver;
pub mod utils;

// Items are accessed via their module path, e.g. `eight_puzzle::solver::search`.
// Only the error type is re-exported at the crate root.
pub use crate::error::{Error, Result};
