/// Everything that can go wrong while building, moving or solving a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("illegal move '{symbol}' at index {index}: blank at ({row}, {col}) is on the edge")]
    IllegalMove {
        symbol: char,
        index: usize,
        row: usize,
        col: usize,
    },
    #[error("invalid move symbol '{symbol}' at index {index}")]
    InvalidSymbol { symbol: char, index: usize },
    #[error("label {0} not found in grid")]
    LabelNotFound(u32),
    #[error("{routine} requires {invariant}, which does not hold")]
    InvariantViolation {
        routine: &'static str,
        invariant: String,
    },
    #[error("puzzle is not solvable: permutation parity does not match blank displacement")]
    Unsolvable,
    #[error("{routine} did not converge after {limit} repetitions of \"{pattern}\"")]
    IterationLimit {
        routine: &'static str,
        pattern: String,
        limit: usize,
    },
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
