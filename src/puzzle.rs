use crate::error::PuzzleError;
use crate::moves::Move;
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt;
use std::str::FromStr;

/// An H×W sliding-tile grid. Label 0 is the blank; the solved layout holds
/// `row * width + col` at every cell, which puts the blank at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    height: usize,
    width: usize,
    board: Vec<Vec<u32>>,
    blank_row: usize,
    blank_col: usize,
}

impl Puzzle {
    /// Solved puzzle of the given size.
    ///
    /// Panics if either dimension is below 2.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 2 && width >= 2,
            "puzzle must be at least 2x2, got {}x{}",
            height,
            width
        );
        let board = (0..height)
            .map(|row| (0..width).map(|col| (row * width + col) as u32).collect())
            .collect();

        Self {
            height,
            width,
            board,
            blank_row: 0,
            blank_col: 0,
        }
    }

    /// Builds a puzzle from explicit rows, checking that they form an H×W
    /// permutation of `0..H*W`.
    pub fn from_grid(board: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let height = board.len();
        let width = board.first().map_or(0, Vec::len);
        if height < 2 || width < 2 {
            return Err(PuzzleError::InvalidGrid(format!(
                "grid must be at least 2x2, got {}x{}",
                height, width
            )));
        }
        if let Some(row) = board.iter().position(|r| r.len() != width) {
            return Err(PuzzleError::InvalidGrid(format!(
                "row {} has {} cells, expected {}",
                row,
                board[row].len(),
                width
            )));
        }

        let cells = height * width;
        let mut seen = vec![false; cells];
        let mut blank = None;
        for (row, values) in board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let idx = value as usize;
                if idx >= cells {
                    return Err(PuzzleError::InvalidGrid(format!(
                        "label {} out of range 0..{}",
                        value, cells
                    )));
                }
                if seen[idx] {
                    return Err(PuzzleError::InvalidGrid(format!("label {} appears twice", value)));
                }
                seen[idx] = true;
                if value == 0 {
                    blank = Some((row, col));
                }
            }
        }
        let (blank_row, blank_col) = blank.ok_or(PuzzleError::LabelNotFound(0))?;

        Ok(Self {
            height,
            width,
            board,
            blank_row,
            blank_col,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u32 {
        self.board[row][col]
    }

    /// Raw cell write. Callers are responsible for keeping the grid a
    /// permutation; writing the blank moves the cached blank position.
    ///
    /// Overwriting the blank's cell with a non-zero label leaves the cached
    /// position stale, and the next move will then duplicate one label and
    /// drop another. Write the blank's new cell with 0 as part of the same
    /// edit.
    pub fn set_tile(&mut self, row: usize, col: usize, value: u32) {
        self.board[row][col] = value;
        if value == 0 {
            self.blank_row = row;
            self.blank_col = col;
        }
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Label that belongs at (row, col) once solved.
    pub fn solved_label(&self, row: usize, col: usize) -> u32 {
        (row * self.width + col) as u32
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.board
    }

    /// Linear scan for `label`.
    pub fn current_position(&self, label: u32) -> Result<(usize, usize), PuzzleError> {
        self.board
            .iter()
            .enumerate()
            .find_map(|(row, values)| values.iter().position(|&v| v == label).map(|col| (row, col)))
            .ok_or(PuzzleError::LabelNotFound(label))
    }

    /// Swaps the blank with its neighbour in the direction of `movement`.
    ///
    /// A refused move is reported as `IllegalMove` with `index` 0, since the
    /// move is treated as a one-symbol move string.
    pub fn apply_move(&mut self, movement: Move) -> Result<(), PuzzleError> {
        if self.step(movement) {
            Ok(())
        } else {
            Err(self.illegal(movement, 0))
        }
    }

    /// Applies every symbol of `moves` in order. Stops at the first bad
    /// symbol, leaving the grid as it was right before that symbol.
    pub fn update_puzzle(&mut self, moves: &str) -> Result<(), PuzzleError> {
        for (index, symbol) in moves.chars().enumerate() {
            let movement =
                Move::from_symbol(symbol).ok_or(PuzzleError::InvalidSymbol { symbol, index })?;
            if !self.step(movement) {
                return Err(self.illegal(movement, index));
            }
        }
        Ok(())
    }

    fn step(&mut self, movement: Move) -> bool {
        let (dr, dc) = movement.as_offset();

        let new_row = self.blank_row as isize + dr;
        let new_col = self.blank_col as isize + dc;

        if new_row >= 0
            && new_row < self.height as isize
            && new_col >= 0
            && new_col < self.width as isize
        {
            let new_row = new_row as usize;
            let new_col = new_col as usize;

            self.board[self.blank_row][self.blank_col] = self.board[new_row][new_col];
            self.board[new_row][new_col] = 0;

            self.blank_row = new_row;
            self.blank_col = new_col;
            true
        } else {
            false
        }
    }

    fn illegal(&self, movement: Move, index: usize) -> PuzzleError {
        PuzzleError::IllegalMove {
            symbol: movement.symbol(),
            index,
            row: self.blank_row,
            col: self.blank_col,
        }
    }

    /// Upper bound on repetitions of any single retry loop in the solver.
    pub(crate) fn iteration_cap(&self) -> usize {
        self.height * self.width
    }

    pub fn is_solved(&self) -> bool {
        self.board.iter().enumerate().all(|(row, values)| {
            values
                .iter()
                .enumerate()
                .all(|(col, &v)| v == self.solved_label(row, col))
        })
    }

    /// Every move swaps two cells and shifts the blank by one, so a grid is
    /// reachable from solved exactly when its permutation parity matches the
    /// parity of the blank's distance from (0, 0).
    pub fn is_solvable(&self) -> bool {
        let flattened: Vec<u32> = self.board.iter().flat_map(|row| row.iter().cloned()).collect();
        Self::parity_matches(&flattened, self.blank_row, self.blank_col)
    }

    fn parity_matches(flattened: &[u32], blank_row: usize, blank_col: usize) -> bool {
        Self::count_inversions(flattened) % 2 == (blank_row + blank_col) % 2
    }

    fn count_inversions(flattened: &[u32]) -> usize {
        flattened
            .iter()
            .enumerate()
            .map(|(i, &val)| flattened[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng());
    }

    /// Random solvable arrangement drawn from `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut labels: Vec<u32> = (0..(self.height * self.width) as u32).collect();

        loop {
            labels.shuffle(rng);

            let blank = labels.iter().position(|&v| v == 0).unwrap_or(0);
            let (blank_row, blank_col) = (blank / self.width, blank % self.width);
            if Self::parity_matches(&labels, blank_row, blank_col) {
                self.board = labels.chunks(self.width).map(<[u32]>::to_vec).collect();
                self.blank_row = blank_row;
                self.blank_col = blank_col;
                return;
            }
        }
    }
}

/// Rows separated by `/` or newlines, cells by commas or whitespace:
/// `"8,7,6/5,4,3/2,1,0"`.
impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| {
                        cell.parse::<u32>()
                            .map_err(|_| PuzzleError::InvalidGrid(format!("bad cell '{}'", cell)))
                    })
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_grid(board)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
