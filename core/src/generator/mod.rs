use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;
pub use random::*;

mod random;

/// Symbols dealt onto a board when no other alphabet is configured.
pub const DEFAULT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&?*+-=";

pub trait SymbolPoolGenerator {
    /// Produces exactly `config.total_cells()` symbols, every chosen symbol twice, in dealing order.
    fn generate(self, config: GameConfig) -> Vec<Symbol>;
}

/// Base set of faces a pool is drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAlphabet(Vec<Symbol>);

impl SymbolAlphabet {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(GameError::EmptyAlphabet);
        }
        Ok(Self(symbols))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// First `pairs` symbols of the alphabet repeated end to end; large boards reuse faces.
    pub fn choose(&self, pairs: CellCount) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied().cycle().take(pairs)
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self(DEFAULT_SYMBOLS.chars().collect())
    }
}

/// Deals every chosen symbol twice, then shuffles the whole pool uniformly with `rng`.
pub fn build_symbol_pool<R: Rng + ?Sized>(
    alphabet: &SymbolAlphabet,
    pairs: CellCount,
    rng: &mut R,
) -> Vec<Symbol> {
    let mut pool = Vec::with_capacity(pairs * 2);
    for symbol in alphabet.choose(pairs) {
        pool.push(symbol);
        pool.push(symbol);
    }
    pool.shuffle(rng);
    pool
}
