//! Fetch orchestration around the matchup calculator

use futures_util::future::try_join_all;
use typedex_matchup::{AttackType, MatchupTable, RelationChart, TypeSet};
use typedex_team::{Roster, TEAM_SIZE, Team, TeamMatchups};

use crate::error::FetchError;
use crate::name::Identifier;
use crate::provider::{DataProvider, PokemonEntry};
use crate::summary::CreatureSummary;

/// A pokemon together with its computed matchups
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    pub entry: PokemonEntry,
    pub matchups: MatchupTable,
}

/// A resolved team and its aggregated matchups
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLookup {
    /// Summary per slot; `None` for empty slots
    pub members: [Option<CreatureSummary>; TEAM_SIZE],
    pub team: Team,
    pub matchups: TeamMatchups,
}

/// Fetch the relations of every given type concurrently.
///
/// Fails as soon as any single fetch fails.
pub async fn fetch_relations<P>(
    provider: &P,
    types: &[AttackType],
) -> Result<RelationChart, FetchError>
where
    P: DataProvider + ?Sized,
{
    let fetched = try_join_all(types.iter().map(|t| async move {
        provider
            .type_relations(*t)
            .await
            .map(|relations| (*t, relations))
    }))
    .await?;

    Ok(fetched.into_iter().collect())
}

/// Resolve a pokemon and compute its matchups.
///
/// The calculator runs only after every relation record has arrived.
pub async fn lookup_matchups<P>(provider: &P, identifier: &Identifier) -> Result<Lookup, FetchError>
where
    P: DataProvider + ?Sized,
{
    let entry = provider.pokemon(identifier).await.inspect_err(|e| {
        tracing::debug!(identifier = %identifier, error = %e, "Pokemon lookup failed");
    })?;

    let relations = fetch_relations(provider, entry.creature.types()).await?;
    let matchups = entry.creature.matchups(&relations)?;

    tracing::debug!(
        pokemon = %entry.summary.name,
        weaknesses = ?matchups.weaknesses(),
        immunities = ?matchups.immunities(),
        "Computed matchups"
    );

    Ok(Lookup { entry, matchups })
}

/// Resolve every named member of a roster and aggregate their matchups.
///
/// Members are fetched concurrently and each distinct defending type's
/// relations are fetched once. Any failed fetch aborts the whole lookup.
pub async fn lookup_team<P>(provider: &P, roster: &Roster) -> Result<TeamLookup, FetchError>
where
    P: DataProvider + ?Sized,
{
    let entries = try_join_all(roster.names().map(|(slot, name)| async move {
        let identifier = Identifier::parse(name)?;
        provider
            .pokemon(&identifier)
            .await
            .map(|entry| (slot, entry))
    }))
    .await?;

    let distinct: TypeSet = entries
        .iter()
        .flat_map(|(_, entry)| entry.creature.types().iter().copied())
        .collect();
    let types: Vec<AttackType> = distinct.iter().collect();
    let relations = fetch_relations(provider, &types).await?;

    let mut team = Team::new();
    let mut members: [Option<CreatureSummary>; TEAM_SIZE] = Default::default();
    for (slot, entry) in entries {
        team.set(slot, Some(entry.creature))?;
        members[slot] = Some(entry.summary);
    }

    let matchups = team.matchups(&relations)?;
    tracing::debug!(
        members = matchups.members(),
        types = types.len(),
        "Aggregated team matchups"
    );

    Ok(TeamLookup {
        members,
        team,
        matchups,
    })
}
