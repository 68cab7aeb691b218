use anyhow::{ensure, Context, Result};
use clap::Parser;
use fifteen_solver::{Move, Puzzle};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser)]
#[command(name = "fifteen-solver")]
#[command(about = "Solve sliding-tile puzzles with the blank ending in the top-left corner")]
struct Cli {
    /// Literal grid, rows separated by '/', cells by ',' (e.g. "8,7,6/5,4,3/2,1,0")
    #[arg(long)]
    grid: Option<String>,

    /// Rows of a shuffled puzzle when no grid is given
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Columns of a shuffled puzzle when no grid is given
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Seed for the shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid after every move of the solution
    #[arg(long)]
    replay: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut puzzle = match &cli.grid {
        Some(literal) => literal
            .parse::<Puzzle>()
            .with_context(|| format!("failed to parse grid {:?}", literal))?,
        None => {
            ensure!(
                cli.height >= 2 && cli.width >= 2,
                "puzzle must be at least 2x2, got {}x{}",
                cli.height,
                cli.width
            );
            let mut puzzle = Puzzle::new(cli.height, cli.width);
            match cli.seed {
                Some(seed) => puzzle.shuffle_with(&mut StdRng::seed_from_u64(seed)),
                None => puzzle.shuffle(),
            }
            puzzle
        }
    };
    let original = puzzle.clone();

    println!("Initial Puzzle:\n{}", puzzle);

    let solution = puzzle.solve_puzzle().context("solver failed")?;
    println!("Solved in {} moves: {}", solution.len(), solution);

    let mut replay = original;
    if cli.replay {
        for (index, symbol) in solution.chars().enumerate() {
            replay
                .update_puzzle(&symbol.to_string())
                .with_context(|| format!("solution did not replay at move {}", index))?;
            let name = Move::from_symbol(symbol).map_or_else(|| symbol.to_string(), |m| m.to_string());
            println!("{}\n{}", name, replay);
        }
    } else {
        replay
            .update_puzzle(&solution)
            .context("solution did not replay")?;
    }
    ensure!(replay.is_solved(), "replayed solution did not solve the puzzle");

    println!("Solved Puzzle:\n{}", puzzle);
    Ok(())
}
