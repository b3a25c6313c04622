use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One playthrough: the dealt board, the cards flipped this turn, and the counters a shell displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Array2<Card>,
    pending: Pending,
    moves: Saturating<u32>,
    matches: Saturating<CellCount>,
    total_pairs: CellCount,
}

/// Unchecked wire form of [`Game`], validated before it becomes playable.
#[derive(Deserialize)]
struct GameSnapshot {
    board: Array2<Card>,
    pending: Pending,
    moves: Saturating<u32>,
    matches: Saturating<CellCount>,
    total_pairs: CellCount,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self> {
        let (rows, cols) = snapshot.board.dim();
        let config = GameConfig::new(rows, cols)?;

        if snapshot.total_pairs != config.total_pairs() {
            return Err(GameError::InvalidSnapshot("pair count does not match board size"));
        }
        if snapshot.matches.0 > snapshot.total_pairs {
            return Err(GameError::InvalidSnapshot("more matches than pairs"));
        }

        Ok(Self {
            board: snapshot.board,
            pending: snapshot.pending,
            moves: snapshot.moves,
            matches: snapshot.matches,
            total_pairs: snapshot.total_pairs,
        })
    }
}

impl Game {
    /// Deals a shuffled board for `config` from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::generate(config, RandomSymbolPoolGenerator::new(seed))
    }

    pub fn generate(config: GameConfig, generator: impl SymbolPoolGenerator) -> Result<Self> {
        let symbols = generator.generate(config);
        Self::layout(config, symbols)
    }

    /// Lays `symbols` row-major without shuffling. Every symbol must occur an even number of times.
    pub fn from_symbols(config: GameConfig, symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.len() != config.total_cells() {
            return Err(GameError::InvalidBoardShape);
        }

        let mut counts = BTreeMap::new();
        for &symbol in &symbols {
            *counts.entry(symbol).or_insert(0usize) += 1;
        }
        if counts.values().any(|count| count % 2 != 0) {
            return Err(GameError::InvalidBoardShape);
        }

        Self::layout(config, symbols)
    }

    fn layout(config: GameConfig, symbols: Vec<Symbol>) -> Result<Self> {
        let cards: Vec<Card> = symbols.into_iter().map(Card::new).collect();
        let board = Array2::from_shape_vec(config.size.to_nd_index(), cards)
            .map_err(|_| GameError::InvalidBoardShape)?;

        log::debug!(
            "New game {}x{} with {} pairs",
            config.rows(),
            config.cols(),
            config.total_pairs()
        );

        Ok(Self {
            board,
            pending: Pending::new(),
            moves: Saturating(0),
            matches: Saturating(0),
            total_pairs: config.total_pairs(),
        })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size())
    }

    pub fn size(&self) -> Coord2 {
        self.board.dim()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    /// Completed two-card turns, matched or not
    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn matches(&self) -> CellCount {
        self.matches.0
    }

    pub fn total_pairs(&self) -> CellCount {
        self.total_pairs
    }

    pub fn board(&self) -> &Array2<Card> {
        &self.board
    }

    pub fn card_at(&self, coords: Coord2) -> Option<&Card> {
        self.board.get(coords.to_nd_index())
    }

    /// Every card with its `(row, col)`, row-major
    pub fn cards(&self) -> impl Iterator<Item = (Coord2, &Card)> {
        self.board.indexed_iter()
    }

    pub fn pending(&self) -> &[Coord2] {
        self.pending.as_slice()
    }

    /// Two cards are face up and waiting; the shell may delay before calling [`Game::resolve_pending`].
    pub fn has_pair_pending(&self) -> bool {
        self.pending.is_full()
    }

    pub fn has_won(&self) -> bool {
        self.matches.0 >= self.total_pairs
    }

    /// Flips the card at a shell-supplied position, `false` when the request is rejected.
    ///
    /// Rejections leave the game untouched: empty board, negative or out of range coordinates,
    /// two cards already pending, or a card that is not face down.
    pub fn reveal_card(&mut self, row: isize, col: isize) -> bool {
        if self.board.is_empty() {
            log::trace!("Reveal on empty board ignored");
            return false;
        }

        match coords_from_signed(row, col) {
            Some(coords) => self.reveal(coords),
            None => {
                log::trace!("Reveal at ({}, {}) is off the board", row, col);
                false
            }
        }
    }

    /// Same as [`Game::reveal_card`] for coordinates that are already unsigned.
    pub fn reveal(&mut self, coords: Coord2) -> bool {
        let Some(coords) = self.validate_coords(coords) else {
            log::trace!("Reveal at {:?} is off the board", coords);
            return false;
        };

        if self.pending.is_full() {
            log::trace!("Reveal at {:?} refused, turn already has two cards", coords);
            return false;
        }

        let card = &mut self.board[coords.to_nd_index()];
        if card.state() != CardState::Hidden {
            log::trace!("Reveal at {:?} refused, card is {}", coords, card.state());
            return false;
        }

        card.set_state(CardState::Visible);
        self.pending.push(coords);
        log::debug!("Revealed {:?} at {:?}", card.symbol(), coords);
        true
    }

    /// Commits the current turn once two cards are pending.
    pub fn resolve_pending(&mut self) -> ResolveOutcome {
        use CardState::*;
        use ResolveOutcome::*;

        let Some((first, second)) = self.pending.pair() else {
            return Unresolved;
        };

        if first == second
            || self.validate_coords(first).is_none()
            || self.validate_coords(second).is_none()
        {
            log::warn!(
                "Discarding malformed pending turn {:?} on {:?} board",
                self.pending.as_slice(),
                self.size()
            );
            self.pending.clear();
            return Discarded;
        }

        self.moves += 1;

        let outcome =
            if self.board[first.to_nd_index()].symbol() == self.board[second.to_nd_index()].symbol() {
                self.board[first.to_nd_index()].set_state(Found);
                self.board[second.to_nd_index()].set_state(Found);
                self.matches += 1;
                Matched
            } else {
                for coords in [first, second] {
                    let card = &mut self.board[coords.to_nd_index()];
                    if card.state() == Visible {
                        card.set_state(Hidden);
                    }
                }
                Mismatch
            };

        self.pending.clear();
        log::debug!(
            "Resolved {:?} and {:?}: {:?}, moves {}, matches {}/{}",
            first,
            second,
            outcome,
            self.moves.0,
            self.matches.0,
            self.total_pairs
        );
        outcome
    }

    fn validate_coords(&self, coords: Coord2) -> Option<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Some(coords)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn game(size: Coord2, symbols: &str) -> Game {
        Game::from_symbols(GameConfig::new_unchecked(size), symbols.chars().collect()).unwrap()
    }

    #[test]
    fn new_game_starts_hidden_with_zero_counters() {
        let game = Game::new(GameConfig::new(4, 5).unwrap(), 9).unwrap();

        assert_eq!(game.size(), (4, 5));
        assert_eq!(game.total_pairs(), 10);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.matches(), 0);
        assert!(game.pending().is_empty());
        assert!(game.cards().all(|(_, card)| card.state() == CardState::Hidden));
        assert!(!game.has_won());
    }

    #[test]
    fn matching_pair_is_found_and_wins() {
        let mut game = game((2, 1), "AA");

        assert!(game.reveal_card(0, 0));
        assert!(!game.has_pair_pending());
        assert!(game.reveal_card(1, 0));
        assert!(game.has_pair_pending());

        assert_eq!(game.resolve_pending(), ResolveOutcome::Matched);
        assert_eq!(game.card_at((0, 0)).unwrap().state(), CardState::Found);
        assert_eq!(game.card_at((1, 0)).unwrap().state(), CardState::Found);
        assert_eq!(game.matches(), 1);
        assert_eq!(game.moves(), 1);
        assert!(game.pending().is_empty());
        assert!(game.has_won());
    }

    #[test]
    fn mismatch_flips_both_cards_back() {
        let mut game = game((2, 2), "ABBA");

        assert!(game.reveal_card(0, 0));
        assert!(game.reveal_card(0, 1));

        assert_eq!(game.resolve_pending().as_pair(), (true, false));
        assert_eq!(game.card_at((0, 0)).unwrap().state(), CardState::Hidden);
        assert_eq!(game.card_at((0, 1)).unwrap().state(), CardState::Hidden);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.matches(), 0);
        assert!(!game.has_won());
    }

    #[test]
    fn third_reveal_is_refused_while_two_are_pending() {
        let mut game = game((2, 2), "ABBA");

        assert!(game.reveal_card(0, 0));
        assert!(game.reveal_card(0, 1));
        let before = game.clone();

        assert!(!game.reveal_card(1, 0));
        assert_eq!(game, before);
        assert_eq!(game.pending().len(), 2);
    }

    #[test]
    fn rejected_reveals_leave_game_unchanged() {
        let mut game = game((2, 2), "ABBA");
        assert!(game.reveal_card(0, 0));
        let before = game.clone();

        for (row, col) in [(-1, 0), (0, -1), (2, 0), (0, 2), (300, 0), (0, 0)] {
            assert!(!game.reveal_card(row, col), "({}, {}) accepted", row, col);
            assert_eq!(game, before);
        }
    }

    #[test]
    fn found_cards_cannot_be_revealed_again() {
        let mut game = game((1, 4), "XXYY");
        game.reveal_card(0, 0);
        game.reveal_card(0, 1);
        game.resolve_pending();
        let before = game.clone();

        assert!(!game.reveal_card(0, 0));
        assert_eq!(game, before);
        assert!(!game.reveal_card(0, 1));
        assert_eq!(game, before);
        assert!(game.pending().is_empty());
    }

    #[test]
    fn resolve_with_fewer_than_two_pending_changes_nothing() {
        let mut game = game((2, 1), "AA");
        assert_eq!(game.resolve_pending(), ResolveOutcome::Unresolved);

        game.reveal_card(0, 0);
        let before = game.clone();
        assert_eq!(game.resolve_pending().as_pair(), (false, false));
        assert_eq!(game, before);
    }

    #[test]
    fn empty_board_rejects_everything_and_is_won() {
        let mut game = game((0, 3), "");

        assert_eq!(game.total_pairs(), 0);
        assert!(!game.reveal_card(0, 0));
        assert_eq!(game.resolve_pending(), ResolveOutcome::Unresolved);
        assert!(game.has_won());
    }

    #[test]
    fn from_symbols_rejects_unpaired_or_short_layouts() {
        let config = GameConfig::new_unchecked((2, 2));
        assert_eq!(
            Game::from_symbols(config, vec!['A', 'A', 'B', 'C']),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Game::from_symbols(config, vec!['A', 'A']),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn boards_wider_than_a_byte_report_their_full_size() {
        let mut game = Game::new(GameConfig::new(2, 256).unwrap(), 4).unwrap();

        assert_eq!(game.size(), (2, 256));
        assert_eq!(game.cards().last().map(|(coords, _)| coords), Some((1, 255)));
        assert!(game.reveal_card(1, 255));
        assert_eq!(game.pending(), &[(1, 255)]);
    }

    #[test]
    fn symbols_are_laid_out_row_major() {
        let game = game((2, 3), "ABCCBA");

        assert_eq!(game.card_at((0, 2)).unwrap().symbol(), 'C');
        assert_eq!(game.card_at((1, 0)).unwrap().symbol(), 'C');
        assert_eq!(game.card_at((1, 2)).unwrap().symbol(), 'A');
        assert_eq!(game.card_at((2, 0)), None);
    }

    #[test]
    fn full_playthrough_counts_moves_and_matches() {
        let mut game = game((2, 2), "ABAB");

        game.reveal_card(0, 0);
        game.reveal_card(0, 1);
        assert_eq!(game.resolve_pending(), ResolveOutcome::Mismatch);

        game.reveal_card(0, 0);
        game.reveal_card(1, 0);
        assert_eq!(game.resolve_pending(), ResolveOutcome::Matched);
        assert!(!game.has_won());

        game.reveal_card(0, 1);
        game.reveal_card(1, 1);
        assert_eq!(game.resolve_pending(), ResolveOutcome::Matched);

        assert_eq!(game.moves(), 3);
        assert_eq!(game.matches(), 2);
        assert!(game.has_won());
    }
}
