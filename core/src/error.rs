use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive")]
    InvalidDimensions,
    #[error("mine count does not fit on the board")]
    InvalidMineCount,
    #[error("position outside the board")]
    InvalidPosition,
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("board not found")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, GameError>;
