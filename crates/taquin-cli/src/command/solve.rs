use clap::Args;
use rand::Rng as _;
use taquin_engine::{Board, ShuffleSeed, Shuffler, Solver};

#[derive(Debug, Clone, Args)]
pub struct SolveArg {
    /// Board to solve, as 16 comma-separated labels with `_` for the blank
    #[arg(long, conflicts_with = "seed")]
    board: Option<Board>,
    /// Seed to shuffle a board from when no board is given
    #[arg(long)]
    seed: Option<ShuffleSeed>,
    /// Walk length used when shuffling from a seed
    #[arg(long, default_value_t = Shuffler::DEFAULT_WALK_LENGTH)]
    walk_length: usize,
    /// Abort after expanding this many search nodes
    #[arg(long)]
    node_limit: Option<usize>,
}

pub fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let board = match &arg.board {
        Some(board) => board.clone(),
        None => {
            let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
            println!("seed: {seed}");
            Shuffler::new()
                .with_walk_length(arg.walk_length)
                .generate_seeded(seed)
        }
    };
    print!("{board}");

    let solver = match arg.node_limit {
        Some(limit) => Solver::with_node_limit(limit),
        None => Solver::new(),
    };
    let solution = solver.solve(&board)?;
    let line: String = solution.iter().map(|direction| direction.as_char()).collect();
    println!("solution ({} moves): {line}", solution.len());
    Ok(())
}
