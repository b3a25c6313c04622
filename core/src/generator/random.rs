use super::*;

/// Seeded generator: the same seed, alphabet and board size always deal the same pool.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSymbolPoolGenerator {
    seed: u64,
    alphabet: SymbolAlphabet,
}

impl RandomSymbolPoolGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            alphabet: SymbolAlphabet::default(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: SymbolAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

impl SymbolPoolGenerator for RandomSymbolPoolGenerator {
    fn generate(self, config: GameConfig) -> Vec<Symbol> {
        use rand::prelude::*;

        let pairs = config.total_pairs();
        if pairs > self.alphabet.len() {
            log::debug!(
                "Board needs {} pairs but alphabet has {} symbols, reusing faces",
                pairs,
                self.alphabet.len()
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        build_symbol_pool(&self.alphabet, pairs, &mut rng)
    }
}
