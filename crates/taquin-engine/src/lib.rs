pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Returned by [`Board::apply`] when the blank cannot travel in the
/// requested direction from its current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot move the blank {direction} from {position}")]
pub struct IllegalMoveError {
    pub direction: Move,
    pub position: Position,
}

/// Returned by [`Board::from_cells`] and the board parser when the input
/// does not describe a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoardError {
    #[display("board has no blank cell")]
    MissingBlank,
    #[display("board has more than one blank cell")]
    ExtraBlank,
    #[display("tile {label} appears more than once")]
    DuplicateTile { label: u8 },
    #[display("expected {CELL_COUNT} comma-separated cells, got {count}")]
    WrongCellCount { count: usize },
    #[display("invalid cell label: {text:?}")]
    BadLabel { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The board fails the parity test and can never reach the solved
    /// configuration. No search is attempted.
    #[display("board cannot reach the solved configuration")]
    Unsolvable,
    /// The caller-supplied node budget ran out before a solution was found.
    #[display("search gave up after expanding {expanded} nodes")]
    SearchExhausted { expanded: usize },
}

/// Returned when a seed string is not 32 hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;
