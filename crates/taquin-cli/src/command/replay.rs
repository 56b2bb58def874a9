use clap::Args;
use rand::Rng as _;
use taquin_engine::{GameSession, ShuffleSeed, Shuffler, Solver};

#[derive(Debug, Clone, Args)]
pub struct ReplayArg {
    /// Seed to generate the board from; random when omitted
    #[arg(long)]
    seed: Option<ShuffleSeed>,
    /// Number of random legal moves the generation walk takes
    #[arg(long, default_value_t = Shuffler::DEFAULT_WALK_LENGTH)]
    walk_length: usize,
}

pub fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let board = Shuffler::new()
        .with_walk_length(arg.walk_length)
        .generate_seeded(seed);
    let solution = Solver::new().solve(&board)?;

    let mut session = GameSession::new(board);
    session.queue_solution(solution)?;
    println!("seed: {seed}");
    println!("start:\n{}", session.board());
    while let Some(direction) = session.step_solution() {
        println!("{direction}:\n{}", session.board());
    }
    println!("solved in {} moves", session.moves());
    Ok(())
}
