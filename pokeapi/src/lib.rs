//! PokeAPI collaborators for the typedex matchup calculator.
//!
//! This crate fetches creatures and per-type damage relations from the
//! public data API and feeds them to [`typedex_matchup`]. The calculator
//! itself never performs I/O; [`lookup_matchups`] only invokes it once every
//! relation record it needs has been retrieved.
//!
//! # Example Usage
//!
//! ```ignore
//! use typedex_pokeapi::{ApiConfig, HttpProvider, Identifier, lookup_matchups};
//!
//! let provider = HttpProvider::new(ApiConfig::from_env()?)?;
//! let lookup = lookup_matchups(&provider, &Identifier::parse("swampert")?).await?;
//!
//! for (attacker, multiplier) in lookup.matchups.iter() {
//!     println!("{attacker}: {multiplier}x");
//! }
//! ```

mod config;
mod error;
mod http;
mod lookup;
pub mod model;
mod name;
mod provider;
mod summary;

pub use config::{ApiConfig, POKEAPI_URL};
pub use error::FetchError;
pub use http::HttpProvider;
pub use lookup::{Lookup, TeamLookup, fetch_relations, lookup_matchups, lookup_team};
pub use name::{Identifier, to_api_name, to_display_name};
pub use provider::{DataProvider, PokemonEntry, StaticProvider};
pub use summary::{CreatureSummary, POKEBALL_SPRITE};

pub use typedex_matchup::{AttackType, Creature, MatchupTable, TypeRelations};
pub use typedex_team::{Roster, Team, TeamMatchups};
