//! Incoming damage multipliers for a defending creature

use std::ops::Index;

use crate::chart::RelationLookup;
use crate::error::MatchupError;
use crate::types::{AttackType, Creature, TYPE_COUNT, TypeRelations, validate_defending_types};

/// Incoming damage multiplier for each of the 18 attacking types.
///
/// Always holds exactly one entry per [`AttackType`]; every entry is >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupTable {
    multipliers: [f32; TYPE_COUNT],
}

impl MatchupTable {
    /// A table with every attacking type at 1x
    pub fn neutral() -> Self {
        Self {
            multipliers: [1.0; TYPE_COUNT],
        }
    }

    /// Multiplier for damage from `attacker`
    pub fn get(&self, attacker: AttackType) -> f32 {
        self.multipliers[attacker.index()]
    }

    /// Iterate `(attacker, multiplier)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (AttackType, f32)> + '_ {
        AttackType::all()
            .iter()
            .map(move |t| (*t, self.multipliers[t.index()]))
    }

    /// Attacking types dealing more than 1x
    pub fn weaknesses(&self) -> Vec<AttackType> {
        self.select(|m| m > 1.0)
    }

    /// Attacking types dealing less than 1x but more than 0x
    pub fn resistances(&self) -> Vec<AttackType> {
        self.select(|m| m > 0.0 && m < 1.0)
    }

    /// Attacking types dealing no damage
    pub fn immunities(&self) -> Vec<AttackType> {
        self.select(|m| m == 0.0)
    }

    /// Attacking types dealing exactly 1x
    pub fn neutral_types(&self) -> Vec<AttackType> {
        self.select(|m| m == 1.0)
    }

    fn select(&self, pred: impl Fn(f32) -> bool) -> Vec<AttackType> {
        self.iter()
            .filter(|(_, m)| pred(*m))
            .map(|(t, _)| t)
            .collect()
    }

    fn apply(&mut self, relations: &TypeRelations) {
        for t in relations.double_damage_from.iter() {
            self.multipliers[t.index()] *= 2.0;
        }
        for t in relations.half_damage_from.iter() {
            self.multipliers[t.index()] *= 0.5;
        }
        for t in relations.no_damage_from.iter() {
            self.multipliers[t.index()] *= 0.0;
        }
    }
}

impl Index<AttackType> for MatchupTable {
    type Output = f32;

    fn index(&self, attacker: AttackType) -> &f32 {
        &self.multipliers[attacker.index()]
    }
}

/// Compute the incoming damage multiplier of every attacking type against
/// a creature with the given defending types.
///
/// Relations for every defending type must be present in `relations`.
/// When `has_ground_immunity` is set, the ground entry is forced to 0 after
/// the type relations have been applied.
///
/// # Errors
///
/// - [`MatchupError::InvalidInput`] for zero, more than two, or duplicate
///   defending types
/// - [`MatchupError::MissingData`] when a defending type has no relations
pub fn compute_matchups<L>(
    defending_types: &[AttackType],
    relations: &L,
    has_ground_immunity: bool,
) -> Result<MatchupTable, MatchupError>
where
    L: RelationLookup + ?Sized,
{
    validate_defending_types(defending_types)?;

    // Resolve everything first so a missing entry never yields a partial table
    let resolved = defending_types
        .iter()
        .map(|t| relations.relations(*t).ok_or(MatchupError::MissingData(*t)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = MatchupTable::neutral();
    for type_relations in resolved {
        table.apply(type_relations);
    }

    if has_ground_immunity {
        table.multipliers[AttackType::Ground.index()] = 0.0;
    }

    Ok(table)
}

impl Creature {
    /// Compute this creature's matchup table
    pub fn matchups<L>(&self, relations: &L) -> Result<MatchupTable, MatchupError>
    where
        L: RelationLookup + ?Sized,
    {
        compute_matchups(self.types(), relations, self.ground_immune())
    }
}
