// Use 3rd party
use thiserror::Error;

// Use internal modules
use crate::client::ClientError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog unavailable: {0}")]
    UpstreamUnavailable(#[from] ClientError),
    #[error("the catalog returned no usable tracks")]
    EmptyPool,
    #[error("{0:?} is not a year, enter four digits")]
    InvalidGuessInput(String),
    #[error("no track selected, start a round first")]
    NoTrackSelected,
    #[error("tracks are still loading")]
    RoundLoading,
    #[error("this round has already been scored")]
    AlreadyScored,
}

impl GameError {
    /// Failures that leave the session without a round; the player can only
    /// ask for a new one.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_) | Self::EmptyPool)
    }
}
