//! Manhattan-distance lower bound used to guide the solver.

use crate::core::Board;

/// Sum over all placed tiles of the grid distance to their solved cells.
///
/// This never overestimates the true number of remaining moves (each move
/// relocates a single tile by one cell), and it changes by at most one
/// between neighboring configurations. Those two properties are what make
/// the solver's results optimal.
#[must_use]
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .cells()
        .filter_map(|(position, cell)| {
            cell.map(|tile| position.manhattan_distance(tile.home_position()))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use super::*;
    use crate::core::Move;

    /// All boards within the given number of moves of the solved board,
    /// keyed to their true minimal distance.
    fn boards_up_to_depth(depth: u32) -> HashMap<Board, u32> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(Board::SOLVED, 0);
        queue.push_back(Board::SOLVED);
        while let Some(board) = queue.pop_front() {
            let distance = distances[&board];
            if distance == depth {
                continue;
            }
            for direction in board.legal_moves() {
                let next = board.apply(direction).unwrap();
                if !distances.contains_key(&next) {
                    distances.insert(next.clone(), distance + 1);
                    queue.push_back(next);
                }
            }
        }
        distances
    }

    #[test]
    fn test_solved_board_estimates_zero() {
        assert_eq!(manhattan_distance(&Board::SOLVED), 0);
    }

    #[test]
    fn test_single_move_estimates_one() {
        for direction in [Move::Up, Move::Left] {
            let board = Board::SOLVED.apply(direction).unwrap();
            assert_eq!(manhattan_distance(&board), 1);
        }
    }

    #[test]
    fn test_never_exceeds_true_distance() {
        for (board, distance) in boards_up_to_depth(6) {
            assert!(
                manhattan_distance(&board) <= distance,
                "estimate exceeds the {distance}-move distance of {board:?}"
            );
        }
    }

    #[test]
    fn test_changes_by_at_most_one_per_move() {
        for (board, _) in boards_up_to_depth(4) {
            let estimate = manhattan_distance(&board);
            for direction in board.legal_moves() {
                let neighbor = board.apply(direction).unwrap();
                assert!(manhattan_distance(&neighbor).abs_diff(estimate) <= 1);
            }
        }
    }
}
