use thiserror::Error;

use crate::types::AttackType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    /// No damage relations were supplied for one of the defending types
    #[error("Missing damage relations for defending type {0}")]
    MissingData(AttackType),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),
}
