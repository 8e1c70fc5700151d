//! Type matchup calculator.
//!
//! Given a creature's one or two defending types, the damage relations of
//! those types, and whether an ability grants ground immunity, this crate
//! computes the incoming damage multiplier of each of the 18 attacking types.
//!
//! # Overview
//!
//! ```text
//! typedex-pokeapi (fetches relations + creatures)
//!        │
//!        ▼
//! typedex-matchup (pure calculator) ← THIS CRATE
//!        │
//!        └─> typedex-team (team aggregation)
//! ```
//!
//! # Main Types
//!
//! - [`AttackType`] - The 18 elemental types
//! - [`TypeSet`] - Bit set of types
//! - [`TypeRelations`] - Double/half/no damage sets for one defending type
//! - [`Creature`] - Validated defending types plus ground immunity
//! - [`MatchupTable`] - Per-attacking-type multiplier result
//! - [`RelationChart`] - Fixed-size relation storage, including the standard chart
//!
//! # Example Usage
//!
//! ```
//! use typedex_matchup::{compute_matchups, AttackType, RelationChart};
//!
//! let chart = RelationChart::standard();
//! let table = compute_matchups(&[AttackType::Water, AttackType::Ground], &chart, false)?;
//!
//! assert_eq!(table[AttackType::Grass], 4.0);
//! assert_eq!(table[AttackType::Electric], 0.0);
//! # Ok::<(), typedex_matchup::MatchupError>(())
//! ```

pub mod calc;
pub mod chart;
mod error;
pub mod query;
pub mod types;

pub use calc::{MatchupTable, compute_matchups};
pub use chart::{RelationChart, RelationLookup};
pub use error::MatchupError;
pub use types::{AttackType, Creature, TYPE_COUNT, TypeRelations, TypeSet};
