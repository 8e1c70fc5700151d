//! Query helpers for matchup tables
//!
//! Convenience predicates over a computed [`MatchupTable`](crate::MatchupTable),
//! useful when ranking candidates or summarizing a creature.

mod matchup;

pub use matchup::{
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};
