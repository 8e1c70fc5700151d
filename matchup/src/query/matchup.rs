//! Type matchup helpers for decision making

use crate::calc::MatchupTable;
use crate::types::AttackType;

/// Check if the defender is weak (>1x) to any of the attacking types
pub fn is_weak_to_any(table: &MatchupTable, attacking_types: &[AttackType]) -> bool {
    attacking_types.iter().any(|t| table.get(*t) > 1.0)
}

/// Check if the defender resists (<1x) all of the attacking types
pub fn resists_all(table: &MatchupTable, attacking_types: &[AttackType]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types.iter().all(|t| table.get(*t) < 1.0)
}

/// Check if the defender is immune (0x) to a type
pub fn is_immune_to(table: &MatchupTable, attacking_type: AttackType) -> bool {
    table.get(attacking_type) == 0.0
}

/// Get all types that are super effective against the defender
pub fn weaknesses(table: &MatchupTable) -> Vec<AttackType> {
    table.weaknesses()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(table: &MatchupTable) -> Vec<AttackType> {
    table.resistances()
}

/// Get all types that the defender is immune to
pub fn immunities(table: &MatchupTable) -> Vec<AttackType> {
    table.immunities()
}
