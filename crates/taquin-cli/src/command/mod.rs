use clap::{Parser, Subcommand};

mod replay;
mod shuffle;
mod solve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a random solvable board
    Shuffle(#[clap(flatten)] shuffle::ShuffleArg),
    /// Compute an optimal move sequence for a board
    Solve(#[clap(flatten)] solve::SolveArg),
    /// Shuffle, solve, and play the solution back one move at a time
    Replay(#[clap(flatten)] replay::ReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Shuffle(arg) => shuffle::run(&arg),
        Mode::Solve(arg) => solve::run(&arg),
        Mode::Replay(arg) => replay::run(&arg),
    }
}
