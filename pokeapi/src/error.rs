use thiserror::Error;
use typedex_matchup::MatchupError;
use typedex_team::TeamError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown type in response: {0}")]
    UnknownType(String),

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Matchup(#[from] MatchupError),

    #[error(transparent)]
    Team(#[from] TeamError),
}
