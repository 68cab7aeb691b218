use super::require;
use crate::error::PuzzleError;
use crate::moves::MoveLog;
use crate::puzzle::Puzzle;
use tracing::debug;

impl Puzzle {
    /// Places the tile for (1, col), `col > 1`, cycling the blank around
    /// columns 0..=col of the top two rows until `row0_invariant(col)` holds.
    pub fn solve_row1_tile(&mut self, col: usize) -> Result<String, PuzzleError> {
        const ROUTINE: &str = "solve_row1_tile";
        require(col >= 2 && self.row1_invariant(col), ROUTINE, || {
            format!("row1_invariant({})", col)
        })?;
        debug!(col, "solving row 1 tile");

        let lap = format!("{}u{}", "l".repeat(col), "r".repeat(col));
        let mut log = MoveLog::new(self, ROUTINE);
        log.apply(&lap)?;
        log.apply_until(&format!("d{}", lap), |p| Ok(p.row0_invariant(col)))?;
        Ok(log.finish())
    }

    /// Places the tile for (0, col), `col > 1`, leaving the blank at
    /// (1, col - 1).
    pub fn solve_row0_tile(&mut self, col: usize) -> Result<String, PuzzleError> {
        const ROUTINE: &str = "solve_row0_tile";
        require(col >= 2 && self.row0_invariant(col), ROUTINE, || {
            format!("row0_invariant({})", col)
        })?;
        debug!(col, "solving row 0 tile");

        let label = self.solved_label(0, col);
        let mut log = MoveLog::new(self, ROUTINE);

        log.apply("l")?;
        if log.puzzle().tile_at(0, col) == label {
            log.apply("d")?;
            return Ok(log.finish());
        }

        let lap = format!("{}d{}u", "l".repeat(col - 1), "r".repeat(col - 1));
        log.apply_until(&lap, |p| Ok(p.tile_at(0, col - 2) == label))?;
        log.apply("rdluldrruld")?;

        debug_assert!(log.puzzle().row1_invariant(col - 1));
        Ok(log.finish())
    }
}
