use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{IllegalMoveError, InvalidBoardError};

use super::{CELL_COUNT, GRID_SIZE, TILE_COUNT, moves::Move, position::Position, tile::Tile};

/// One configuration of the fifteen numbered tiles plus the blank.
///
/// A board is an immutable value: [`Board::apply`] returns a new board and
/// leaves the receiver untouched, so a search can branch from the same
/// ancestor configuration any number of times. Every board holds each label
/// exactly once and exactly one blank; the validating constructors uphold
/// this, and all other operations preserve it.
///
/// # Example
///
/// ```
/// use taquin_engine::{Board, Move};
///
/// let board = Board::SOLVED.apply(Move::Up)?;
/// assert!(!board.is_solved());
/// assert!(board.apply(Move::Down)?.is_solved());
/// # Ok::<_, taquin_engine::IllegalMoveError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Tile>; CELL_COUNT],
    blank: Position,
}

impl Board {
    /// The target configuration: tiles 1..15 in row-major order, blank last.
    #[expect(clippy::cast_possible_truncation)]
    pub const SOLVED: Self = {
        let mut cells = [None; CELL_COUNT];
        let mut index = 0;
        while index < TILE_COUNT {
            cells[index] = Tile::new(index as u8 + 1);
            index += 1;
        }
        Self {
            cells,
            blank: Position::from_index(CELL_COUNT - 1),
        }
    };

    /// Builds a board from its cells, validating the board invariants.
    pub fn from_cells(cells: [Option<Tile>; CELL_COUNT]) -> Result<Self, InvalidBoardError> {
        let mut blank = None;
        let mut seen = [false; TILE_COUNT];
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                None => {
                    if blank.is_some() {
                        return Err(InvalidBoardError::ExtraBlank);
                    }
                    blank = Some(Position::from_index(index));
                }
                Some(tile) => {
                    let slot = &mut seen[usize::from(tile.get()) - 1];
                    if *slot {
                        return Err(InvalidBoardError::DuplicateTile { label: tile.get() });
                    }
                    *slot = true;
                }
            }
        }
        // 16 cells, one blank, no duplicate of 15 possible labels: all present.
        let blank = blank.ok_or(InvalidBoardError::MissingBlank)?;
        Ok(Self { cells, blank })
    }

    /// Cell currently holding the blank.
    #[must_use]
    pub const fn blank_position(&self) -> Position {
        self.blank
    }

    /// Tile at the given cell, `None` for the blank.
    #[must_use]
    pub const fn tile_at(&self, position: Position) -> Option<Tile> {
        self.cells[position.index()]
    }

    /// Cell currently holding the given tile.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Position {
        self.cells
            .iter()
            .position(|cell| *cell == Some(tile))
            .map(Position::from_index)
            .expect("every label appears exactly once on a valid board")
    }

    /// Every direction the blank can travel from its current cell: two in a
    /// corner, three on an edge, four in the interior.
    #[must_use]
    pub fn legal_moves(&self) -> ArrayVec<Move, 4> {
        Move::ALL
            .into_iter()
            .filter(|direction| self.blank.step(*direction).is_some())
            .collect()
    }

    /// Returns a new board with the blank swapped into the neighboring cell.
    pub fn apply(&self, direction: Move) -> Result<Self, IllegalMoveError> {
        let target = self.blank.step(direction).ok_or(IllegalMoveError {
            direction,
            position: self.blank,
        })?;
        let mut cells = self.cells;
        cells.swap(self.blank.index(), target.index());
        Ok(Self {
            cells,
            blank: target,
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Tile>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (Position::from_index(index), *cell))
    }

    /// Maps "slide the tile at `position`" onto the blank-relative move that
    /// performs it, or `None` when that tile is not adjacent to the blank.
    #[must_use]
    pub fn move_for_tile(&self, position: Position) -> Option<Move> {
        self.blank.direction_to(position)
    }

    fn write_compact(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                out.write_char(',')?;
            }
            match cell {
                Some(tile) => write!(out, "{tile}")?,
                None => out.write_char('_')?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board(")?;
        self.write_compact(f)?;
        f.write_str(")")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>2}", tile.get())?,
                    None => f.write_str(" .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = InvalidBoardError;

    /// Parses the compact form: 16 comma-separated labels in row-major
    /// order, with `_` marking the blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != CELL_COUNT {
            return Err(InvalidBoardError::WrongCellCount { count: parts.len() });
        }
        let mut cells = [None; CELL_COUNT];
        for (cell, part) in cells.iter_mut().zip(&parts) {
            *cell = match *part {
                "_" => None,
                label => Some(
                    label
                        .parse::<u8>()
                        .ok()
                        .and_then(Tile::new)
                        .ok_or_else(|| InvalidBoardError::BadLabel {
                            text: label.to_string(),
                        })?,
                ),
            };
        }
        Self::from_cells(cells)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut text = String::with_capacity(CELL_COUNT * 3);
        self.write_compact(&mut text).unwrap();
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(label: u8) -> Tile {
        Tile::new(label).unwrap()
    }

    #[test]
    fn test_solved_layout() {
        let board = Board::SOLVED;
        assert!(board.is_solved());
        assert_eq!(board.blank_position(), Position::new(3, 3));
        for label in 1..=15 {
            assert_eq!(board.position_of(tile(label)), tile(label).home_position());
        }
        assert_eq!(board.tile_at(Position::new(0, 0)), Some(tile(1)));
        assert_eq!(board.tile_at(Position::new(3, 3)), None);
    }

    #[test]
    fn test_legal_move_counts() {
        // Blank in a corner.
        let board = Board::SOLVED;
        assert_eq!(board.legal_moves().len(), 2);

        // Blank on an edge.
        let board = board.apply(Move::Up).unwrap();
        assert_eq!(board.blank_position(), Position::new(2, 3));
        assert_eq!(board.legal_moves().len(), 3);

        // Blank in the interior.
        let board = board.apply(Move::Left).unwrap();
        assert_eq!(board.blank_position(), Position::new(2, 2));
        assert_eq!(board.legal_moves().len(), 4);
    }

    #[test]
    fn test_apply_swaps_blank_with_neighbor() {
        let board = Board::SOLVED.apply(Move::Up).unwrap();
        assert_eq!(board.tile_at(Position::new(3, 3)), Some(tile(12)));
        assert_eq!(board.tile_at(Position::new(2, 3)), None);
        // The receiver is untouched.
        assert!(Board::SOLVED.is_solved());
    }

    #[test]
    fn test_apply_rejects_off_grid_moves() {
        let err = Board::SOLVED.apply(Move::Down).unwrap_err();
        assert_eq!(err.direction, Move::Down);
        assert_eq!(err.position, Position::new(3, 3));
        assert!(Board::SOLVED.apply(Move::Right).is_err());
    }

    #[test]
    fn test_moves_are_invertible() {
        let mut board = Board::SOLVED;
        // Wander a bit so the blank visits corners, edges, and the interior.
        for direction in [Move::Up, Move::Left, Move::Up, Move::Left, Move::Down] {
            board = board.apply(direction).unwrap();
            for legal in board.legal_moves() {
                let there_and_back = board
                    .apply(legal)
                    .unwrap()
                    .apply(legal.opposite())
                    .unwrap();
                assert_eq!(there_and_back, board);
            }
        }
    }

    #[test]
    fn test_from_cells_validates_invariants() {
        // All blanks: the second one is already one too many.
        assert_eq!(
            Board::from_cells([None; CELL_COUNT]),
            Err(InvalidBoardError::ExtraBlank)
        );

        // Solved layout with the blank replaced by a second tile 7.
        let mut cells = [None; CELL_COUNT];
        for label in 1..=15u8 {
            cells[usize::from(label) - 1] = Tile::new(label);
        }
        cells[CELL_COUNT - 1] = Tile::new(7);
        assert_eq!(
            Board::from_cells(cells),
            Err(InvalidBoardError::DuplicateTile { label: 7 })
        );
    }

    #[test]
    fn test_move_for_tile() {
        let board = Board::SOLVED;
        // Tile 15 sits left of the blank, tile 12 above it.
        assert_eq!(board.move_for_tile(Position::new(3, 2)), Some(Move::Left));
        assert_eq!(board.move_for_tile(Position::new(2, 3)), Some(Move::Up));
        assert_eq!(board.move_for_tile(Position::new(0, 0)), None);
        assert_eq!(board.move_for_tile(Position::new(2, 2)), None);
    }

    #[test]
    fn test_parse_round_trip() {
        let text = "5,1,2,3,9,6,7,4,13,10,11,8,14,15,_,12";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.blank_position(), Position::new(3, 2));
        assert_eq!(format!("{board:?}"), format!("Board({text})"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "1,2,3".parse::<Board>(),
            Err(InvalidBoardError::WrongCellCount { count: 3 })
        );
        assert!(matches!(
            "1,2,3,4,5,6,7,8,9,10,11,12,13,14,16,_".parse::<Board>(),
            Err(InvalidBoardError::BadLabel { .. })
        ));
        assert_eq!(
            "1,1,3,4,5,6,7,8,9,10,11,12,13,14,15,_".parse::<Board>(),
            Err(InvalidBoardError::DuplicateTile { label: 1 })
        );
        assert_eq!(
            "1,2,3,4,5,6,7,8,9,10,11,12,_,14,15,_".parse::<Board>(),
            Err(InvalidBoardError::ExtraBlank)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::SOLVED.apply(Move::Up).unwrap();
        let serialized = serde_json::to_string(&board).unwrap();
        assert_eq!(
            serialized,
            "\"1,2,3,4,5,6,7,8,9,10,11,_,13,14,15,12\""
        );
        let deserialized: Board = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, board);
    }

    #[test]
    fn test_display_renders_grid() {
        let rendered = Board::SOLVED.to_string();
        let expected = " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  .\n";
        assert_eq!(rendered, expected);
    }
}
