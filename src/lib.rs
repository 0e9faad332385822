//! # Peg Solitaire Solver Library
//!
//! This library solves the English peg-solitaire puzzle: a cross-shaped
//! 7x7 board starts with every hole filled except the center, and the goal
//! is a sequence of jumps that leaves exactly one peg.
//!
//! It is used by the `peg_solver` binary, which solves the standard board
//! (or a board read from a file) and prints the discovered moves.
//!
//! ## Modules
//! - `engine`: Board representation (`Board`), coordinates (`Position`),
//!   jump directions (`Direction`) and moves (`Move`).
//! - `enumerator`: Legality checks and the fixed candidate order used to
//!   walk legal moves without materializing them.
//! - `solver`: Provides `solve_dfs`, the backtracking depth-first search.
//! - `report`: Renders a solution record line by line.
//! - `utils`: Parsing boards from text.
//! - `error`: Error types shared by the modules above.
//! - `logging`: Tracing subscriber setup for the binary.

pub mod engine;
pub mod enumerator;
pub mod error;
pub mod logging;
pub mod report;
pub mod solver;
pub mod utils;
