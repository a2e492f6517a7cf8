use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while loading holdings. The screen logs it
/// and keeps its current state.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request to holdings endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("holdings endpoint returned status {0}")]
    Status(StatusCode),
    #[error("unexpected holdings payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0} does not fit in a decimal amount")]
    Overflow(String),
}
