//! Core Sudoku engine: grid model, constraint checking, validation, and
//! backtracking solving.
//!
//! The engine is a pure library with no UI of its own. A caller hands it a
//! 9x9 grid of digits (0 meaning empty) and gets back either a validation
//! report or a solved grid; rendering, input handling, and the given/solved
//! cell distinction all live in the caller.
//!
//! ```
//! use sudoku_engine::{Grid, Solver};
//!
//! let puzzle = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//! assert!(puzzle.validate().is_valid());
//!
//! let solution = Solver::new().solve(&puzzle).solved().unwrap();
//! assert!(solution.is_complete());
//! ```

mod grid;
mod solver;
mod validate;

pub use grid::{Grid, ParseGridError, Position};
pub use solver::{SolveResult, Solver};
pub use validate::ValidationReport;
