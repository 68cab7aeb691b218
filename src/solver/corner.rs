use super::require;
use crate::error::PuzzleError;
use crate::moves::MoveLog;
use crate::puzzle::Puzzle;
use tracing::debug;

const ROTATION: [&str; 4] = ["d", "r", "u", "l"];

// Three laps of the 2×2 block return it to where it started.
const MAX_LAPS: usize = 3;

impl Puzzle {
    /// Closes the top-left 2×2 block by rotating the blank around it.
    pub fn solve_2x2(&mut self) -> Result<String, PuzzleError> {
        const ROUTINE: &str = "solve_2x2";
        require(self.corner_invariant(), ROUTINE, || "corner_invariant".to_string())?;

        let home = match self.blank_position() {
            (0, 0) => "",
            (0, 1) => "l",
            (1, 0) => "u",
            _ => "ul",
        };
        debug!(home, "closing 2x2 corner");

        let mut log = MoveLog::new(self, ROUTINE);
        log.apply(home)?;
        for step in ROTATION.iter().cycle().take(ROTATION.len() * MAX_LAPS) {
            if log.puzzle().corner_solved() {
                return Ok(log.finish());
            }
            log.apply(step)?;
        }

        if log.puzzle().corner_solved() {
            Ok(log.finish())
        } else {
            Err(PuzzleError::IterationLimit {
                routine: ROUTINE,
                pattern: ROTATION.concat(),
                limit: MAX_LAPS,
            })
        }
    }
}
