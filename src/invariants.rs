//! Read-only checks that a partially solved grid is ready for the next
//! phase routine.

use crate::moves::Move;
use crate::puzzle::Puzzle;

impl Puzzle {
    fn row_solved_from(&self, row: usize, first_col: usize) -> bool {
        (first_col..self.width()).all(|col| self.tile_at(row, col) == self.solved_label(row, col))
    }

    fn rows_solved_below(&self, row: usize) -> bool {
        (row + 1..self.height()).all(|r| self.row_solved_from(r, 0))
    }

    /// Blank at (row, col), every row below `row` solved, and every cell to
    /// the right of `col` in `row` solved.
    pub fn lower_row_invariant(&self, row: usize, col: usize) -> bool {
        self.blank_position() == (row, col)
            && self.rows_solved_below(row)
            && self.row_solved_from(row, col + 1)
    }

    /// `lower_row_invariant(1, col)` plus row 0 solved to the right of `col`.
    pub fn row1_invariant(&self, col: usize) -> bool {
        self.lower_row_invariant(1, col) && self.row_solved_from(0, col + 1)
    }

    /// Blank at (0, col), (1, col) already solved, and moving the blank down
    /// would leave `row1_invariant(col)` true.
    pub fn row0_invariant(&self, col: usize) -> bool {
        if self.blank_position() != (0, col) || self.tile_at(1, col) != self.solved_label(1, col) {
            return false;
        }
        let mut probe = self.clone();
        probe.apply_move(Move::Down).is_ok() && probe.row1_invariant(col)
    }

    /// Everything outside the top-left 2×2 block is solved and the blank
    /// sits inside it.
    pub fn corner_invariant(&self) -> bool {
        let (row, col) = self.blank_position();
        row < 2
            && col < 2
            && self.rows_solved_below(1)
            && self.row_solved_from(0, 2)
            && self.row_solved_from(1, 2)
    }

    pub(crate) fn corner_solved(&self) -> bool {
        [(0, 0), (0, 1), (1, 0), (1, 1)]
            .iter()
            .all(|&(row, col)| self.tile_at(row, col) == self.solved_label(row, col))
    }
}
