use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Coord2, GameError, Result};

/// Most cards that can be face up and unresolved at once.
pub const MAX_PENDING: usize = 2;

/// Positions flipped during the current turn, in reveal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SmallVec<[Coord2; MAX_PENDING]>")]
pub struct Pending(SmallVec<[Coord2; MAX_PENDING]>);

impl TryFrom<SmallVec<[Coord2; MAX_PENDING]>> for Pending {
    type Error = GameError;

    fn try_from(entries: SmallVec<[Coord2; MAX_PENDING]>) -> Result<Self> {
        if entries.len() > MAX_PENDING {
            return Err(GameError::InvalidSnapshot("more than two pending cards"));
        }
        Ok(Self(entries))
    }
}

impl Pending {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_PENDING
    }

    pub fn as_slice(&self) -> &[Coord2] {
        &self.0
    }

    /// Appends a position, refusing once the turn already holds two cards
    pub(crate) fn push(&mut self, coords: Coord2) -> bool {
        if self.is_full() {
            return false;
        }
        self.0.push(coords);
        true
    }

    /// Both positions of a complete turn, `None` for any other length
    pub(crate) fn pair(&self) -> Option<(Coord2, Coord2)> {
        match self.0.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}
