use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on the board, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Both coordinates must be in 0..9.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9, "position ({row},{col}) out of bounds");
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position { row, col }))
    }

    /// Top-left corner of the 3x3 block containing this position.
    pub fn block_origin(&self) -> Position {
        Position {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }
}

/// Error constructing a [`Grid`] from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("expected 81 cells, found {found}")]
    BadLength { found: usize },
    #[error("invalid character {ch:?} at index {index}")]
    InvalidChar { index: usize, ch: char },
    #[error("cell ({row},{col}) holds {value}, expected a digit 0-9")]
    InvalidDigit { row: usize, col: usize, value: u8 },
}

/// A 9x9 Sudoku board. Empty cells are `None`, placed digits are `Some(1..=9)`.
///
/// The grid carries no notion of which digits were puzzle givens; callers that
/// need to distinguish given from solved cells remember the grid they started
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<u8>; 9]; 9],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from a 9x9 matrix of digits, where 0 means empty.
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                match value {
                    0 => {}
                    1..=9 => grid.cells[row][col] = Some(value),
                    _ => return Err(ParseGridError::InvalidDigit { row, col, value }),
                }
            }
        }
        Ok(grid)
    }

    /// Parse a grid from an 81-character puzzle string, row by row.
    /// `0` or `.` denotes an empty cell.
    pub fn from_string(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut count = 0;
        for (index, ch) in s.chars().enumerate() {
            if index >= 81 {
                return Err(ParseGridError::BadLength {
                    found: s.chars().count(),
                });
            }
            let pos = Position::new(index / 9, index % 9);
            match ch {
                '0' | '.' => {}
                '1'..='9' => grid.cells[pos.row][pos.col] = Some(ch as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidChar { index, ch }),
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::BadLength { found: count });
        }
        Ok(grid)
    }

    /// Get the value at a position.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or clear the value at a position.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(
            value.map_or(true, |v| (1..=9).contains(&v)),
            "digit {value:?} out of range"
        );
        self.cells[pos.row][pos.col] = value;
    }

    /// Snapshot of all cell values.
    pub fn values(&self) -> [[Option<u8>; 9]; 9] {
        self.cells
    }

    /// Check whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Count the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Check whether `digit` could be placed at `pos` without clashing with
    /// another occurrence in the same row, column, or 3x3 block.
    ///
    /// The cell at `pos` itself is excluded from the comparison, so the check
    /// reads as "could this digit stand here" regardless of what the cell
    /// currently holds.
    pub fn is_valid_placement(&self, pos: Position, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit), "digit {digit} out of range");

        for col in 0..9 {
            if col != pos.col && self.cells[pos.row][col] == Some(digit) {
                return false;
            }
        }

        for row in 0..9 {
            if row != pos.row && self.cells[row][pos.col] == Some(digit) {
                return false;
            }
        }

        let origin = pos.block_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                if (row != pos.row || col != pos.col) && self.cells[row][col] == Some(digit) {
                    return false;
                }
            }
        }

        true
    }

    /// Render as an 81-character puzzle string, `0` for empty cells.
    pub fn to_string_compact(&self) -> String {
        let mut out = String::with_capacity(81);
        for pos in Position::all() {
            match self.get(pos) {
                Some(value) => out.push((b'0' + value) as char),
                None => out.push('0'),
            }
        }
        out
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    Some(value) => write!(f, "{value} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
