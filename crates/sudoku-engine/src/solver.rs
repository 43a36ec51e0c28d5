use crate::Grid;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of a solve attempt.
///
/// `Unsolvable` is a normal result, not an error: it is the proof that no
/// assignment of digits to the empty cells satisfies the constraints. There
/// is never a partially filled result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveResult {
    /// A complete grid satisfying every row, column, and block constraint.
    Solved(Grid),
    /// No assignment of digits 1-9 to the empty cells satisfies the
    /// constraints, or the given digits already conflict.
    Unsolvable,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    /// The solved grid, if any.
    pub fn solved(self) -> Option<Grid> {
        match self {
            SolveResult::Solved(grid) => Some(grid),
            SolveResult::Unsolvable => None,
        }
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Fill every empty cell of the grid, or prove that no filling exists.
    ///
    /// The search is depth-first backtracking over a private working copy:
    /// empty cells are visited in row-major order and digits tried in
    /// ascending order, so the result is a pure function of the input even
    /// when the puzzle admits several solutions.
    ///
    /// The given digits are validated up front; a grid whose filled cells
    /// already conflict is reported `Unsolvable` rather than searched, since
    /// backtracking only ever revisits cells it filled itself.
    pub fn solve(&self, grid: &Grid) -> SolveResult {
        if !grid.validate().is_valid() {
            debug!("given digits already conflict, skipping search");
            return SolveResult::Unsolvable;
        }

        let mut working = grid.clone();
        debug!("solving grid with {} empty cells", working.empty_count());
        if solve_recursive(&mut working) {
            SolveResult::Solved(working)
        } else {
            SolveResult::Unsolvable
        }
    }
}

/// Fill the first empty cell and recurse; undo on failure. Depth is bounded
/// by the 81 cells, so native recursion is fine.
fn solve_recursive(grid: &mut Grid) -> bool {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => return true,
    };

    for digit in 1..=9 {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, Some(digit));
            if solve_recursive(grid) {
                return true;
            }
            grid.set(pos, None);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_easy() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();

        let solution = solver.solve(&grid).solved().unwrap();
        assert!(solution.is_complete());
        assert_eq!(solution.to_string_compact(), SOLUTION);
    }

    #[test]
    fn test_solution_has_no_conflicts() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solution = Solver::new().solve(&grid).solved().unwrap();
        assert!(solution.validate().is_valid());
    }

    #[test]
    fn test_solve_preserves_givens() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solution = Solver::new().solve(&grid).solved().unwrap();

        for pos in Position::all() {
            if let Some(value) = grid.get(pos) {
                assert_eq!(solution.get(pos), Some(value));
            }
        }
    }

    #[test]
    fn test_solve_empty_grid() {
        let solver = Solver::new();
        let solution = solver.solve(&Grid::new()).solved().unwrap();

        assert!(solution.is_complete());
        assert!(solution.validate().is_valid());
        // Ascending digit order fills the first row 1 through 9.
        assert!(solution.to_string_compact().starts_with("123456789"));
    }

    #[test]
    fn test_solve_is_deterministic() {
        // The empty grid admits many solutions; the fixed search order must
        // always pick the same one.
        let solver = Solver::new();
        let first = solver.solve(&Grid::new()).solved().unwrap();
        let second = solver.solve(&Grid::new()).solved().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_already_solved_grid() {
        let grid = Grid::from_string(SOLUTION).unwrap();
        let result = Solver::new().solve(&grid);
        assert_eq!(result, SolveResult::Solved(grid));
    }

    #[test]
    fn test_conflicting_givens_are_unsolvable() {
        let mut values = [[0u8; 9]; 9];
        values[0][0] = 5;
        values[0][5] = 5;
        let grid = Grid::from_values(values).unwrap();

        assert_eq!(Solver::new().solve(&grid), SolveResult::Unsolvable);
    }

    #[test]
    fn test_dead_end_grid_is_unsolvable() {
        // No duplicates anywhere, but (0,0) has no candidate: 1-8 occupy its
        // row and the 9 at (2,2) occupies its block.
        let mut values = [[0u8; 9]; 9];
        values[0] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        values[2][2] = 9;
        let grid = Grid::from_values(values).unwrap();

        assert!(grid.validate().is_valid());
        assert_eq!(Solver::new().solve(&grid), SolveResult::Unsolvable);
    }

    #[test]
    fn test_solve_result_accessors() {
        assert!(!SolveResult::Unsolvable.is_solved());
        assert_eq!(SolveResult::Unsolvable.solved(), None);

        let result = SolveResult::Solved(Grid::new());
        assert!(result.is_solved());
        assert_eq!(result.solved(), Some(Grid::new()));
    }
}
