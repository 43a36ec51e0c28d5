use crate::{Grid, Position};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of scanning a grid for constraint violations.
///
/// Holds every cell whose digit clashes with another occupant of the same
/// row, column, or block, in row-major order. An empty report means the grid
/// as currently filled is consistent; it says nothing about completeness or
/// solvability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    conflicts: Vec<Position>,
}

impl ValidationReport {
    /// True when no cell conflicts with another.
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// The conflicting cells, in row-major order.
    pub fn conflicts(&self) -> &[Position] {
        &self.conflicts
    }

    /// Check whether a specific cell was flagged.
    pub fn contains(&self, pos: Position) -> bool {
        self.conflicts.contains(&pos)
    }
}

impl Grid {
    /// Report every filled cell whose digit violates a row, column, or block
    /// constraint.
    ///
    /// Each of the 81 cells is checked independently, with its own value
    /// masked out, so both members of a duplicate pair are reported.
    pub fn validate(&self) -> ValidationReport {
        let mut conflicts = Vec::new();
        for pos in Position::all() {
            if let Some(value) = self.get(pos) {
                if !self.is_valid_placement(pos, value) {
                    conflicts.push(pos);
                }
            }
        }
        if !conflicts.is_empty() {
            debug!("validation found {} conflicting cells", conflicts.len());
        }
        ValidationReport { conflicts }
    }
}
