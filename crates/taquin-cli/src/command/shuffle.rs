use clap::Args;
use rand::Rng as _;
use taquin_engine::{ShuffleSeed, Shuffler};

#[derive(Debug, Clone, Args)]
pub struct ShuffleArg {
    /// Seed to generate from (32 hex characters); random when omitted
    #[arg(long)]
    seed: Option<ShuffleSeed>,
    /// Number of random legal moves the generation walk takes
    #[arg(long, default_value_t = Shuffler::DEFAULT_WALK_LENGTH)]
    walk_length: usize,
    /// Minimum Manhattan distance from the solved layout
    #[arg(long, default_value_t = Shuffler::DEFAULT_MIN_SCRAMBLE_DISTANCE)]
    min_distance: u32,
}

pub fn run(arg: &ShuffleArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let board = Shuffler::new()
        .with_walk_length(arg.walk_length)
        .with_min_scramble_distance(arg.min_distance)
        .generate_seeded(seed);
    println!("seed: {seed}");
    print!("{board}");
    Ok(())
}
