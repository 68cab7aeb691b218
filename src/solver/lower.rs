use super::require;
use crate::error::PuzzleError;
use crate::moves::MoveLog;
use crate::puzzle::Puzzle;
use tracing::debug;

/// Where the target tile sits relative to the blank at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Approach {
    SameRow,
    AboveRight,
    AboveLeft,
    DirectlyAbove,
}

impl Approach {
    fn classify((tile_row, tile_col): (usize, usize), row: usize, col: usize) -> Self {
        if tile_row == row {
            Approach::SameRow
        } else if tile_col > col {
            Approach::AboveRight
        } else if tile_col < col {
            Approach::AboveLeft
        } else {
            Approach::DirectlyAbove
        }
    }
}

impl Puzzle {
    /// Places the tile for (row, col), `row > 1` and `col > 0`, and leaves
    /// the blank at (row, col - 1).
    pub fn solve_interior_tile(&mut self, row: usize, col: usize) -> Result<String, PuzzleError> {
        const ROUTINE: &str = "solve_interior_tile";
        require(
            row >= 2 && col >= 1 && self.lower_row_invariant(row, col),
            ROUTINE,
            || format!("lower_row_invariant({}, {})", row, col),
        )?;

        let label = self.solved_label(row, col);
        let (tile_row, tile_col) = self.current_position(label)?;
        let approach = Approach::classify((tile_row, tile_col), row, col);
        debug!(row, col, tile_row, tile_col, ?approach, "solving interior tile");

        let mut log = MoveLog::new(self, ROUTINE);

        if approach == Approach::SameRow {
            log.repeat("l", col - tile_col)?;
            log.apply_until("urrdl", |p| Ok(p.tile_at(row, col) == label))?;
            debug_assert!(log.puzzle().lower_row_invariant(row, col - 1));
            return Ok(log.finish());
        }

        log.repeat("u", row - tile_row)?;
        match approach {
            Approach::AboveRight => {
                log.repeat("r", tile_col - col)?;
                let (pattern, closer) = if tile_row == 0 {
                    ("dllur", "dlu")
                } else {
                    ("ulldr", "ul")
                };
                log.apply_until(pattern, |p| Ok(p.current_position(label)?.1 == col))?;
                log.apply(closer)?;
            }
            Approach::AboveLeft => {
                log.repeat("l", col - tile_col)?;
                log.apply_until("drrul", |p| Ok(p.current_position(label)?.1 == col))?;
                log.apply("dru")?;
            }
            Approach::DirectlyAbove | Approach::SameRow => {}
        }

        // blank is now directly above the tile
        log.apply_until("lddru", |p| Ok(p.tile_at(row, col) == label))?;
        log.apply("ld")?;

        debug_assert!(log.puzzle().lower_row_invariant(row, col - 1));
        Ok(log.finish())
    }

    /// Places the tile for (row, 0), `row > 1`, and parks the blank at the
    /// right end of the row above.
    pub fn solve_col0_tile(&mut self, row: usize) -> Result<String, PuzzleError> {
        const ROUTINE: &str = "solve_col0_tile";
        require(row >= 2 && self.lower_row_invariant(row, 0), ROUTINE, || {
            format!("lower_row_invariant({}, 0)", row)
        })?;

        let width = self.width();
        let label = self.solved_label(row, 0);
        let mut log = MoveLog::new(self, ROUTINE);

        log.apply("ur")?;
        let (tile_row, tile_col) = log.puzzle().current_position(label)?;
        debug!(row, tile_row, tile_col, "solving column 0 tile");

        if (tile_row, tile_col) == (row, 0) {
            log.repeat("r", width - 2)?;
            return Ok(log.finish());
        }

        // Stage the tile at (tile_row, 0) with the blank just right of it.
        match tile_col {
            0 => log.repeat("u", row - 1 - tile_row)?,
            1 => {
                log.apply("l")?;
                log.repeat("u", row - 1 - tile_row)?;
                log.apply("r")?;
            }
            _ => {
                log.repeat("u", row - 1 - tile_row)?;
                log.repeat("r", tile_col - 1)?;
                let pattern = if tile_row == 0 { "dllur" } else { "ulldr" };
                log.apply_until(pattern, |p| Ok(p.current_position(label)?.1 == 0))?;
            }
        }

        // Walk it down to (row - 2, 0), blank ending at (row - 1, 1).
        match row - tile_row {
            1 => log.apply("uldr")?,
            2 => log.apply("d")?,
            gap => {
                log.repeat("dlurd", gap - 2)?;
                log.apply("d")?;
            }
        }
        log.apply_until("uldr", |p| Ok(p.tile_at(row - 2, 0) == label))?;

        log.apply("dlurdluurddlu")?;
        log.repeat("r", width - 1)?;

        debug_assert!(log.puzzle().lower_row_invariant(row - 1, width - 1));
        Ok(log.finish())
    }
}
