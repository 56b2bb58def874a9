//! Parity test deciding whether a configuration can reach the solved board.

use arrayvec::ArrayVec;

use crate::core::{Board, GRID_SIZE, TILE_COUNT, Tile};

/// Counts tile pairs whose row-major reading order is reversed from
/// ascending label order.
#[must_use]
pub fn inversions(board: &Board) -> usize {
    let labels: ArrayVec<Tile, TILE_COUNT> =
        board.cells().filter_map(|(_, cell)| cell).collect();
    labels
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            labels[index + 1..]
                .iter()
                .filter(|later| *later < tile)
                .count()
        })
        .sum()
}

/// Whether the board can reach the solved configuration by legal moves.
///
/// On this even-width grid a configuration is solvable exactly when the
/// inversion count and the blank's row distance from the bottom row have
/// the same parity. Legal moves preserve that combined parity, and within
/// the solvable class every configuration is reachable, so this test is
/// both necessary and sufficient.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let blank_row_from_bottom = GRID_SIZE - 1 - board.blank_position().row();
    (inversions(board) + blank_row_from_bottom) % 2 == 0
}
