//! Team rosters and aggregated type matchups.
//!
//! A [`Team`] owns up to six optional [`Creature`] slots. Its
//! [`TeamMatchups`] are the pointwise sum of each present member's
//! [`MatchupTable`](typedex_matchup::MatchupTable); empty slots add nothing.
//!
//! A [`Roster`] is the unresolved form of a team: six optional member
//! names, as entered by a user or stored on disk as JSON.

mod aggregate;
mod error;
mod roster;
mod team;

pub use aggregate::{TeamMatchups, aggregate};
pub use error::TeamError;
pub use roster::Roster;
pub use team::{TEAM_SIZE, Team};

pub use typedex_matchup::{AttackType, Creature};
