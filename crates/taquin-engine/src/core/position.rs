use std::fmt;

use super::{CELL_COUNT, GRID_SIZE, moves::Move};

/// Cell address on the 4×4 grid.
///
/// Row 0 is the top row and column 0 the leftmost column. Both coordinates
/// are always below [`GRID_SIZE`]; neighbor steps that would leave the grid
/// return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < GRID_SIZE);
        assert!((col as usize) < GRID_SIZE);
        Self { row, col }
    }

    /// Converts a row-major cell index back into a position.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT);
        Self::new((index / GRID_SIZE) as u8, (index % GRID_SIZE) as u8)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index, `row * 4 + col`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * GRID_SIZE + self.col()
    }

    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self::new(self.row - 1, self.col))
        }
    }

    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row as usize >= GRID_SIZE - 1 {
            None
        } else {
            Some(Self::new(self.row + 1, self.col))
        }
    }

    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self::new(self.row, self.col - 1))
        }
    }

    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col as usize >= GRID_SIZE - 1 {
            None
        } else {
            Some(Self::new(self.row, self.col + 1))
        }
    }

    /// Neighbor cell in the given direction, `None` at the grid border.
    #[must_use]
    pub const fn step(self, direction: Move) -> Option<Self> {
        match direction {
            Move::Up => self.up(),
            Move::Down => self.down(),
            Move::Left => self.left(),
            Move::Right => self.right(),
        }
    }

    /// Direction that steps from `self` onto `other`, for adjacent cells.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|direction| self.step(*direction) == Some(other))
    }

    /// Grid distance, the sum of the absolute row and column differences.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stay_on_grid() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.up(), None);
        assert_eq!(corner.left(), None);
        assert_eq!(corner.down(), Some(Position::new(1, 0)));
        assert_eq!(corner.right(), Some(Position::new(0, 1)));

        let opposite = Position::new(3, 3);
        assert_eq!(opposite.down(), None);
        assert_eq!(opposite.right(), None);
        assert_eq!(opposite.up(), Some(Position::new(2, 3)));
        assert_eq!(opposite.left(), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..CELL_COUNT {
            assert_eq!(Position::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_direction_to_adjacent_cells() {
        let center = Position::new(1, 2);
        assert_eq!(center.direction_to(Position::new(0, 2)), Some(Move::Up));
        assert_eq!(center.direction_to(Position::new(2, 2)), Some(Move::Down));
        assert_eq!(center.direction_to(Position::new(1, 1)), Some(Move::Left));
        assert_eq!(center.direction_to(Position::new(1, 3)), Some(Move::Right));

        // Not adjacent: same cell, diagonal, two cells away.
        assert_eq!(center.direction_to(center), None);
        assert_eq!(center.direction_to(Position::new(0, 1)), None);
        assert_eq!(center.direction_to(Position::new(3, 2)), None);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(0, 0);
        assert_eq!(a.manhattan_distance(a), 0);
        assert_eq!(a.manhattan_distance(Position::new(3, 3)), 6);
        assert_eq!(
            Position::new(2, 1).manhattan_distance(Position::new(0, 2)),
            3
        );
    }
}
