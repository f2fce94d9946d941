use minado_core::GameError;
use thiserror::Error;

/// Failures surfaced to the service caller: either a game-rule violation from
/// the core, reported as-is, or a storage backend failure propagated
/// unmodified.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("storage backend failure")]
    Backend(#[from] anyhow::Error),
}

impl ServiceError {
    pub const fn as_game_error(&self) -> Option<GameError> {
        match self {
            Self::Game(error) => Some(*error),
            Self::Backend(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
