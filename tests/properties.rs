//! Property-based tests for the grid model and the solver.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use fifteen_solver::{Move, Puzzle, PuzzleError};

/// Strategy: any arrangement of `0..H*W` on an H×W grid, H and W in 2..=8.
/// About half of these are unsolvable.
fn grid_strategy() -> impl Strategy<Value = Puzzle> {
    (2..=8usize, 2..=8usize).prop_flat_map(|(height, width)| {
        Just((0..(height * width) as u32).collect::<Vec<u32>>())
            .prop_shuffle()
            .prop_map(move |labels| {
                Puzzle::from_grid(labels.chunks(width).map(<[u32]>::to_vec).collect())
                    .expect("shuffled labels form a permutation")
            })
    })
}

/// Strategy: a solvable H×W grid, H and W in 2..=8, drawn by the crate's
/// own shuffle.
fn solvable_grid_strategy() -> impl Strategy<Value = Puzzle> {
    (2..=8usize, 2..=8usize, any::<u64>()).prop_map(|(height, width, seed)| {
        let mut puzzle = Puzzle::new(height, width);
        puzzle.shuffle_with(&mut StdRng::seed_from_u64(seed));
        puzzle
    })
}

/// Strategy: a move string over the full alphabet, legal or not.
fn move_string_strategy() -> impl Strategy<Value = String> {
    "[udlr]{0,200}"
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Up),
        Just(Move::Left),
        Just(Move::Down),
        Just(Move::Right),
    ]
}

fn sorted_labels(puzzle: &Puzzle) -> Vec<u32> {
    let mut labels = puzzle.rows().concat();
    labels.sort_unstable();
    labels
}

proptest! {
    // 1. A solution replays from the start to the solved layout
    #[test]
    fn solution_replays_to_solved(start in solvable_grid_strategy()) {
        let mut puzzle = start.clone();
        let moves = puzzle.solve_puzzle();
        prop_assert!(moves.is_ok(), "solver failed on\n{start}: {moves:?}");
        prop_assert!(puzzle.is_solved(), "solver left\n{puzzle}");

        let mut replay = start.clone();
        prop_assert_eq!(replay.update_puzzle(&moves.unwrap_or_default()), Ok(()));
        prop_assert_eq!(replay, Puzzle::new(start.height(), start.width()));
    }

    // 2. A move shifts the blank by exactly its offset, or is refused and
    //    leaves the grid untouched
    #[test]
    fn move_follows_offset_or_is_refused(start in grid_strategy(), mv in move_strategy()) {
        let (row, col) = start.blank_position();
        let (dr, dc) = mv.as_offset();
        let (target_row, target_col) = (row as isize + dr, col as isize + dc);
        let inside = target_row >= 0
            && target_row < start.height() as isize
            && target_col >= 0
            && target_col < start.width() as isize;

        let mut puzzle = start.clone();
        match puzzle.apply_move(mv) {
            Ok(()) => {
                prop_assert!(inside, "{mv:?} accepted off the edge of\n{start}");
                let target = (target_row as usize, target_col as usize);
                prop_assert_eq!(puzzle.blank_position(), target);
                prop_assert_eq!(puzzle.tile_at(target.0, target.1), 0);
                prop_assert_eq!(puzzle.tile_at(row, col), start.tile_at(target.0, target.1));
            }
            Err(err) => {
                prop_assert!(!inside, "{mv:?} refused inside\n{start}");
                prop_assert_eq!(
                    err,
                    PuzzleError::IllegalMove { symbol: mv.symbol(), index: 0, row, col }
                );
                prop_assert_eq!(&puzzle, &start);
            }
        }
    }

    // 3. Labels stay a permutation of 0..H*W whatever moves are applied
    #[test]
    fn moves_preserve_permutation(start in grid_strategy(), moves in move_string_strategy()) {
        let mut puzzle = start.clone();
        let _ = puzzle.update_puzzle(&moves);

        prop_assert_eq!(sorted_labels(&puzzle), sorted_labels(&start));
        let (row, col) = puzzle.blank_position();
        prop_assert_eq!(puzzle.tile_at(row, col), 0);
    }

    // 4. A refused move string stops right before the offending symbol
    #[test]
    fn refused_string_keeps_legal_prefix(start in grid_strategy(), moves in move_string_strategy()) {
        let mut puzzle = start.clone();
        if let Err(err) = puzzle.update_puzzle(&moves) {
            let index = match err {
                PuzzleError::IllegalMove { index, .. } => index,
                other => return Err(TestCaseError::fail(format!("unexpected error {other}"))),
            };
            let mut prefix = start.clone();
            prop_assert_eq!(prefix.update_puzzle(&moves[..index]), Ok(()));
            prop_assert_eq!(prefix, puzzle);
        }
    }

    // 5. The solver refuses exactly the unsolvable grids, and solves the rest
    #[test]
    fn unsolvable_exactly_when_parity_fails(start in grid_strategy()) {
        let mut puzzle = start.clone();
        let result = puzzle.solve_puzzle();
        if start.is_solvable() {
            prop_assert!(result.is_ok(), "solver failed on\n{start}: {result:?}");
            prop_assert!(puzzle.is_solved());
        } else {
            prop_assert_eq!(result, Err(PuzzleError::Unsolvable));
            prop_assert_eq!(&puzzle, &start);
        }
    }
}
