use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use typedex_matchup::{AttackType, Creature, RelationChart, TypeRelations};

use crate::error::FetchError;
use crate::model::PokemonResponse;
use crate::name::Identifier;
use crate::summary::CreatureSummary;

/// A resolved pokemon: its calculator input and its display summary
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonEntry {
    pub creature: Creature,
    pub summary: CreatureSummary,
}

impl PokemonEntry {
    pub fn from_response(response: &PokemonResponse) -> Result<Self, FetchError> {
        Ok(Self {
            creature: response.creature()?,
            summary: CreatureSummary::from_response(response)?,
        })
    }
}

/// Source of type relations and pokemon data.
///
/// Implementations own transport concerns (timeouts, caching, retries);
/// callers only see the decoded records or a [`FetchError`].
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Damage relations for a defending type
    async fn type_relations(&self, defending: AttackType) -> Result<TypeRelations, FetchError>;

    /// Look up a pokemon by name or dex number
    async fn pokemon(&self, identifier: &Identifier) -> Result<PokemonEntry, FetchError>;
}

/// In-memory provider backed by a relation chart and registered entries.
#[derive(Debug, Default)]
pub struct StaticProvider {
    chart: RelationChart,
    by_name: HashMap<String, PokemonEntry>,
    names_by_id: HashMap<u32, String>,
    type_requests: AtomicUsize,
}

impl StaticProvider {
    pub fn new(chart: RelationChart) -> Self {
        Self {
            chart,
            ..Self::default()
        }
    }

    /// Provider serving the standard type chart
    pub fn standard() -> Self {
        Self::new(RelationChart::standard())
    }

    /// Register a pokemon, replacing any entry with the same name
    pub fn insert(&mut self, entry: PokemonEntry) {
        self.names_by_id
            .insert(entry.summary.id, entry.summary.name.clone());
        self.by_name.insert(entry.summary.name.clone(), entry);
    }

    pub fn with_pokemon(mut self, entry: PokemonEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Register a pokemon from an API response
    pub fn with_response(self, response: &PokemonResponse) -> Result<Self, FetchError> {
        Ok(self.with_pokemon(PokemonEntry::from_response(response)?))
    }

    /// Number of type relation requests served so far
    pub fn type_requests(&self) -> usize {
        self.type_requests.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn type_relations(&self, defending: AttackType) -> Result<TypeRelations, FetchError> {
        self.type_requests.fetch_add(1, Ordering::Relaxed);
        self.chart
            .get(defending)
            .copied()
            .ok_or_else(|| FetchError::NotFound(defending.as_str().to_string()))
    }

    async fn pokemon(&self, identifier: &Identifier) -> Result<PokemonEntry, FetchError> {
        let name = match identifier {
            Identifier::Name(name) => Some(name),
            Identifier::Id(id) => self.names_by_id.get(id),
        };

        name.and_then(|n| self.by_name.get(n))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(identifier.to_string()))
    }
}
