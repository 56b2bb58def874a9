use std::{fmt, num::NonZeroU8};

use super::{TILE_COUNT, position::Position};

/// Numbered tile label in `1..=15`.
///
/// Backed by `NonZeroU8` so that `Option<Tile>` stays a single byte; the
/// blank cell is represented as `None` wherever cells are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(NonZeroU8);

impl Tile {
    /// Creates a tile from its label, rejecting anything outside `1..=15`.
    #[must_use]
    pub const fn new(label: u8) -> Option<Self> {
        if label as usize > TILE_COUNT {
            return None;
        }
        match NonZeroU8::new(label) {
            Some(label) => Some(Self(label)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Cell this tile occupies in the solved layout.
    #[must_use]
    pub const fn home_position(self) -> Position {
        Position::from_index(self.get() as usize - 1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_range() {
        assert_eq!(Tile::new(0), None);
        assert_eq!(Tile::new(16), None);
        assert_eq!(Tile::new(1).unwrap().get(), 1);
        assert_eq!(Tile::new(15).unwrap().get(), 15);
    }

    #[test]
    fn test_home_positions() {
        assert_eq!(Tile::new(1).unwrap().home_position(), Position::new(0, 0));
        assert_eq!(Tile::new(4).unwrap().home_position(), Position::new(0, 3));
        assert_eq!(Tile::new(5).unwrap().home_position(), Position::new(1, 0));
        assert_eq!(Tile::new(15).unwrap().home_position(), Position::new(3, 2));
    }
}
