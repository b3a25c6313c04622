use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must hold an even number of cards, got {rows}x{cols}")]
    InvalidBoardDimensions { rows: usize, cols: usize },
    #[error("Board is too large to allocate")]
    BoardTooLarge,
    #[error("Symbol alphabet must not be empty")]
    EmptyAlphabet,
    #[error("Symbol layout does not match declared board size")]
    InvalidBoardShape,
    #[error("Saved game is inconsistent: {0}")]
    InvalidSnapshot(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
