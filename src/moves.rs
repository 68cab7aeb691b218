use crate::error::PuzzleError;
use crate::puzzle::Puzzle;
use std::fmt;
use tracing::trace;

/// One step of the blank. `Up` moves the blank one row up, swapping it with
/// the tile above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'u' => Some(Move::Up),
            'l' => Some(Move::Left),
            'd' => Some(Move::Down),
            'r' => Some(Move::Right),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Move::Up => 'u',
            Move::Left => 'l',
            Move::Down => 'd',
            Move::Right => 'r',
        }
    }

    /// Change in the blank's (row, col).
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }
}

/// `blank up (u)`: the direction the blank travels, then its move symbol.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        };
        write!(f, "blank {} ({})", direction, self.symbol())
    }
}

/// Applies move strings to a puzzle and records everything applied.
///
/// Phase routines only touch the grid through this type, so the returned
/// string always replays to the state the routine left behind.
pub(crate) struct MoveLog<'a> {
    puzzle: &'a mut Puzzle,
    moves: String,
    routine: &'static str,
}

impl<'a> MoveLog<'a> {
    pub(crate) fn new(puzzle: &'a mut Puzzle, routine: &'static str) -> Self {
        Self {
            puzzle,
            moves: String::new(),
            routine,
        }
    }

    pub(crate) fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }

    pub(crate) fn apply(&mut self, moves: &str) -> Result<(), PuzzleError> {
        trace!(routine = self.routine, moves, "applying");
        self.puzzle.update_puzzle(moves)?;
        self.moves.push_str(moves);
        Ok(())
    }

    pub(crate) fn repeat(&mut self, moves: &str, times: usize) -> Result<(), PuzzleError> {
        for _ in 0..times {
            self.apply(moves)?;
        }
        Ok(())
    }

    /// Applies `pattern` until `done` holds, giving up after the puzzle's
    /// iteration cap.
    pub(crate) fn apply_until<F>(&mut self, pattern: &str, mut done: F) -> Result<(), PuzzleError>
    where
        F: FnMut(&Puzzle) -> Result<bool, PuzzleError>,
    {
        let limit = self.puzzle.iteration_cap();
        for _ in 0..limit {
            if done(self.puzzle)? {
                return Ok(());
            }
            self.apply(pattern)?;
        }
        if done(self.puzzle)? {
            Ok(())
        } else {
            Err(PuzzleError::IterationLimit {
                routine: self.routine,
                pattern: pattern.to_string(),
                limit,
            })
        }
    }

    pub(crate) fn finish(self) -> String {
        self.moves
    }
}
