//! Phase-by-phase solver. Tiles are placed from the bottom row up, the last
//! two rows column by column from the right, and the top-left 2×2 block is
//! closed by rotation.

mod corner;
mod lower;
mod top_rows;

use crate::error::PuzzleError;
use crate::moves::MoveLog;
use crate::puzzle::Puzzle;
use tracing::{debug, info, warn};

/// Fails with `InvariantViolation` unless `holds`.
fn require<F>(holds: bool, routine: &'static str, invariant: F) -> Result<(), PuzzleError>
where
    F: FnOnce() -> String,
{
    if holds {
        Ok(())
    } else {
        Err(PuzzleError::InvariantViolation {
            routine,
            invariant: invariant(),
        })
    }
}

impl Puzzle {
    /// Solves the puzzle in place and returns the move string that was
    /// applied. Unsolvable grids are rejected before anything moves.
    pub fn solve_puzzle(&mut self) -> Result<String, PuzzleError> {
        if self.is_solved() {
            return Ok(String::new());
        }
        if !self.is_solvable() {
            warn!(height = self.height(), width = self.width(), "rejecting unsolvable grid");
            return Err(PuzzleError::Unsolvable);
        }

        let mut solution = self.align_blank()?;

        for row in (2..self.height()).rev() {
            for col in (1..self.width()).rev() {
                solution += &self.solve_interior_tile(row, col)?;
            }
            solution += &self.solve_col0_tile(row)?;
        }

        for col in (2..self.width()).rev() {
            solution += &self.solve_row1_tile(col)?;
            solution += &self.solve_row0_tile(col)?;
        }

        solution += &self.solve_2x2()?;

        debug_assert!(self.is_solved());
        info!(moves = solution.len(), "solved puzzle");
        Ok(solution)
    }

    /// Drives the blank to the bottom-right corner.
    fn align_blank(&mut self) -> Result<String, PuzzleError> {
        let (row, col) = self.blank_position();
        let (height, width) = (self.height(), self.width());
        debug!(row, col, "aligning blank");

        let mut log = MoveLog::new(self, "align_blank");
        log.repeat("r", width - 1 - col)?;
        log.repeat("d", height - 1 - row)?;
        Ok(log.finish())
    }
}
