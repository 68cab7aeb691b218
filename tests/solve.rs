use fifteen_solver::{Puzzle, PuzzleError};
use rand::{rngs::StdRng, SeedableRng};

fn solve_and_replay(start: &Puzzle) -> String {
    let mut puzzle = start.clone();
    let moves = puzzle
        .solve_puzzle()
        .unwrap_or_else(|err| panic!("failed on\n{}: {}", start, err));
    assert!(puzzle.is_solved(), "solver left\n{}", puzzle);

    let mut replay = start.clone();
    replay.update_puzzle(&moves).unwrap();
    assert_eq!(replay, Puzzle::new(start.height(), start.width()));
    moves
}

#[test]
fn solves_reversed_three_by_three() {
    let start: Puzzle = "8,7,6/5,4,3/2,1,0".parse().unwrap();
    let moves = solve_and_replay(&start);
    assert!(moves.chars().all(|c| "udlr".contains(c)));
}

#[test]
fn solves_fixed_grids() {
    for literal in [
        "7,1,2/3,4,5/6,0,8",
        "3,1,2/0,4,5/6,7,8",
        "8,7,0/5,4,3/2,6,1",
        "1,0/2,3",
        "3,2/1,0",
        "15,16,0,3,4/5,6,7,8,9/10,11,12,13,14/1,2,17,18,19",
        "4,1,2,3/5,0,6,7/8,9,10,11",
    ] {
        let start: Puzzle = literal.parse().unwrap();
        solve_and_replay(&start);
    }
}

#[test]
fn solved_grid_is_left_alone() {
    for (height, width) in [(2, 2), (3, 3), (2, 5), (5, 2), (4, 6)] {
        let mut puzzle = Puzzle::new(height, width);
        assert_eq!(puzzle.solve_puzzle().unwrap(), "");
        assert!(puzzle.is_solved());
    }
}

#[test]
fn random_grids_of_many_shapes() {
    let mut rng = StdRng::seed_from_u64(0x15);
    for height in 2..=6 {
        for width in 2..=6 {
            for _ in 0..10 {
                let mut start = Puzzle::new(height, width);
                start.shuffle_with(&mut rng);
                solve_and_replay(&start);
            }
        }
    }
}

#[test]
fn narrow_and_flat_grids() {
    let mut rng = StdRng::seed_from_u64(42);
    for (height, width) in [(8, 2), (2, 8), (7, 3), (3, 7)] {
        for _ in 0..10 {
            let mut start = Puzzle::new(height, width);
            start.shuffle_with(&mut rng);
            solve_and_replay(&start);
        }
    }
}

#[test]
fn unsolvable_grids_are_rejected() {
    for literal in ["4,1,2/3,5,0/6,7,8", "8,7,6/5,0,3/2,1,4", "0,2/1,3", "0,2,1,3/4,5,6,7"] {
        let mut puzzle: Puzzle = literal.parse().unwrap();
        let before = puzzle.clone();
        assert_eq!(puzzle.solve_puzzle(), Err(PuzzleError::Unsolvable));
        assert_eq!(puzzle, before);
    }
}

#[test]
fn solutions_are_deterministic() {
    let start: Puzzle = "8,7,0/5,4,3/2,6,1".parse().unwrap();
    assert_eq!(solve_and_replay(&start), solve_and_replay(&start));
}
