pub use self::{board::*, moves::*, position::*, tile::*};

pub(crate) mod board;
pub(crate) mod moves;
pub(crate) mod position;
pub(crate) mod tile;

/// Width and height of the square grid.
pub const GRID_SIZE: usize = 4;
/// Total number of cells, including the blank.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Number of numbered tiles.
pub const TILE_COUNT: usize = CELL_COUNT - 1;
