use thiserror::Error;
use typedex_matchup::MatchupError;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Slot {0} is out of range (teams have six slots)")]
    SlotOutOfRange(usize),

    #[error("Too many members: {0} (teams have six slots)")]
    TooManyMembers(usize),

    #[error("Matchup failed for slot {slot}: {source}")]
    Matchup {
        slot: usize,
        #[source]
        source: MatchupError,
    },

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}
