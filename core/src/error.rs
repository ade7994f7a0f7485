use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Cell is already occupied")]
    Occupied,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No game has been started")]
    NotStarted,
    #[error("Both players use the same mark")]
    DuplicateMark,
    #[error("Mark must be a single visible symbol")]
    InvalidMark,
}

pub type Result<T> = core::result::Result<T, GameError>;
