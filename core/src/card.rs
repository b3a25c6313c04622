use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Face state of a single card.
///
/// Valid transitions:
/// - Hidden -> Visible
/// - Visible -> Hidden (mismatched pair flips back)
/// - Visible -> Found (matched together with its twin)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    /// Face down
    Hidden,
    /// Face up, waiting to be resolved this turn
    Visible,
    /// Matched, stays face up for the rest of the game
    Found,
}

impl CardState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
            Self::Found => "found",
        }
    }

    /// Whether the symbol should be drawn
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Visible | Self::Found)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::Hidden
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: Symbol,
    state: CardState,
}

impl Card {
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: CardState::Hidden,
        }
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn state(&self) -> CardState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CardState) {
        self.state = state;
    }

    /// Symbol if the card is face up, `None` while hidden
    pub const fn face(&self) -> Option<Symbol> {
        if self.state.is_face_up() {
            Some(self.symbol)
        } else {
            None
        }
    }
}
