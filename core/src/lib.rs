#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pending::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod pending;
mod types;

/// Board dimensions, validated so the board always splits into whole pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows % 2 == 1 && cols % 2 == 1 {
            return Err(GameError::InvalidBoardDimensions { rows, cols });
        }
        checked_cells(rows, cols).ok_or(GameError::BoardTooLarge)?;
        Ok(Self::new_unchecked((rows, cols)))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn total_pairs(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((4, 4))
    }
}

/// Builds a fresh game on a `rows` x `cols` board dealt from `seed`.
pub fn create_game(rows: usize, cols: usize, seed: u64) -> Result<Game> {
    Game::new(GameConfig::new(rows, cols)?, seed)
}

/// Outcome of resolving the pending turn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Fewer than two cards were pending, nothing changed
    Unresolved,
    /// The two cards differed and flipped back
    Mismatch,
    /// The two cards formed a pair and stay face up
    Matched,
    /// Pending referred to cards outside the board and was dropped without counting a move
    Discarded,
}

impl ResolveOutcome {
    /// Whether the pending turn was consumed
    pub const fn is_resolved(self) -> bool {
        use ResolveOutcome::*;
        match self {
            Unresolved => false,
            Mismatch => true,
            Matched => true,
            Discarded => true,
        }
    }

    pub const fn found_pair(self) -> bool {
        matches!(self, Self::Matched)
    }

    /// `(resolved, found_pair)`
    pub const fn as_pair(self) -> (bool, bool) {
        (self.is_resolved(), self.found_pair())
    }
}
