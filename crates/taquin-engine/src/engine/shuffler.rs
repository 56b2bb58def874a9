//! Random starting-board generation.

use std::{fmt::Write as _, str::FromStr};

use arrayvec::ArrayVec;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IndexedRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ParseSeedError,
    core::{Board, Move},
};

use super::{heuristic::manhattan_distance, solvability::is_solvable};

/// Seed for deterministic board generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind [`Shuffler::generate_seeded`]. The same seed always
/// produces the same board, enabling:
///
/// - Reproducible games for debugging
/// - Sharing a puzzle by sharing its seed
/// - Deterministic testing
///
/// Seeds render as 32 hexadecimal characters, and parse back from that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleSeed([u8; 16]);

impl std::fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for ShuffleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for ShuffleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid seed: {hex_str:?}")))
    }
}

/// Allows generating random `ShuffleSeed` values with `rng.random()`.
impl Distribution<ShuffleSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShuffleSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ShuffleSeed(seed)
    }
}

/// Generates random starting boards that are guaranteed solvable and
/// guaranteed not already solved.
///
/// Generation walks a configurable number of random legal moves away from
/// [`Board::SOLVED`], never immediately undoing the previous move. Every
/// configuration reachable that way is solvable by construction, so no
/// parity repair is ever needed. Walks that end too close to the solved
/// layout are thrown away and rerun.
///
/// The randomness source is supplied by the caller; see
/// [`generate_seeded`](Self::generate_seeded) for the deterministic variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuffler {
    walk_length: usize,
    min_scramble_distance: u32,
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler {
    pub const DEFAULT_WALK_LENGTH: usize = 150;
    pub const DEFAULT_MIN_SCRAMBLE_DISTANCE: u32 = 3;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            walk_length: Self::DEFAULT_WALK_LENGTH,
            min_scramble_distance: Self::DEFAULT_MIN_SCRAMBLE_DISTANCE,
        }
    }

    /// Sets how many random legal moves the generation walk takes.
    #[must_use]
    pub const fn with_walk_length(mut self, walk_length: usize) -> Self {
        self.walk_length = walk_length;
        self
    }

    /// Sets the minimum Manhattan distance from the solved layout a
    /// generated board must have.
    ///
    /// Zero keeps only the not-already-solved guarantee. The distance must
    /// be achievable within the configured walk length, or generation will
    /// retry forever.
    #[must_use]
    pub const fn with_min_scramble_distance(mut self, distance: u32) -> Self {
        self.min_scramble_distance = distance;
        self
    }

    /// Generates a board using the supplied randomness source.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        loop {
            let board = self.random_walk(rng);
            if !board.is_solved() && manhattan_distance(&board) >= self.min_scramble_distance {
                debug_assert!(is_solvable(&board));
                return board;
            }
        }
    }

    /// Like [`Self::generate`], but fully determined by the given seed.
    #[must_use]
    pub fn generate_seeded(&self, seed: ShuffleSeed) -> Board {
        self.generate(&mut Pcg32::from_seed(seed.0))
    }

    fn random_walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut board = Board::SOLVED;
        let mut last_move = None;
        for _ in 0..self.walk_length {
            let candidates: ArrayVec<Move, 4> = board
                .legal_moves()
                .into_iter()
                .filter(|direction| last_move != Some(direction.opposite()))
                .collect();
            let direction = *candidates
                .choose(rng)
                .expect("the blank always has a move that does not backtrack");
            board = board
                .apply(direction)
                .expect("moves reported legal always apply");
            last_move = Some(direction);
        }
        board
    }
}
