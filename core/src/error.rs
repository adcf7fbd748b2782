use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match 3x10")]
    InvalidBoardShape,
    #[error("No numbers left to draw")]
    PoolExhausted,
    #[error("Number {0} appears more than once")]
    DuplicateNumber(u8),
    #[error("Number {0} is outside 0..=99")]
    NumberOutOfRange(u8),
    #[error("Value {value} does not belong to column {col}")]
    ValueOutsideColumn { value: u8, col: u8 },
}

pub type Result<T> = core::result::Result<T, GameError>;

/// The announce capability failed or is unsupported. Always safe to ignore;
/// game state never depends on an announcement landing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("announcement unavailable: {0}")]
pub struct AnnounceError(pub String);
