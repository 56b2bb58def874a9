//! Puzzle engine built on the core board value.
//!
//! - [`Shuffler`] / [`ShuffleSeed`] - random starting boards, guaranteed
//!   solvable and not already solved
//! - [`is_solvable`] / [`inversions`] - the parity reachability test
//! - [`manhattan_distance`] - admissible lower bound on remaining moves
//! - [`Solver`] - optimal move sequences via A* search
//! - [`GameSession`] - owned current-game state for a presentation layer
//!
//! # Flow
//!
//! A presentation layer asks the [`Shuffler`] for a starting [`Board`],
//! forwards player moves through a [`GameSession`], and on request hands the
//! current board to the [`Solver`], queueing the returned sequence so an
//! animation driver can play it back one move at a time.
//!
//! # Example
//!
//! ```
//! use taquin_engine::{GameSession, Shuffler, Solver};
//!
//! let board = Shuffler::new().with_walk_length(12).generate(&mut rand::rng());
//! let solution = Solver::new().solve(&board)?;
//!
//! let mut session = GameSession::new(board);
//! session.queue_solution(solution)?;
//! while session.step_solution().is_some() {}
//! assert!(session.is_solved());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Board`]: crate::Board

pub use self::{heuristic::*, session::*, shuffler::*, solvability::*, solver::*};

mod heuristic;
mod session;
mod shuffler;
mod solvability;
mod solver;
