//! Team-wide matchup aggregation

use std::ops::Index;

use typedex_matchup::{AttackType, Creature, RelationLookup, TYPE_COUNT};

use crate::error::TeamError;
use crate::team::TEAM_SIZE;

/// Summed incoming damage multipliers across the members of a team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMatchups {
    totals: [f32; TYPE_COUNT],
    members: usize,
}

impl TeamMatchups {
    /// Summed multiplier for damage from `attacker`
    pub fn get(&self, attacker: AttackType) -> f32 {
        self.totals[attacker.index()]
    }

    /// Number of members that contributed
    pub fn members(&self) -> usize {
        self.members
    }

    /// Iterate `(attacker, total)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (AttackType, f32)> + '_ {
        AttackType::all()
            .iter()
            .map(move |t| (*t, self.totals[t.index()]))
    }

    /// Attacking types ordered from most to least threatening.
    ///
    /// Ties keep canonical order.
    pub fn threats(&self) -> Vec<(AttackType, f32)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Index<AttackType> for TeamMatchups {
    type Output = f32;

    fn index(&self, attacker: AttackType) -> &f32 {
        &self.totals[attacker.index()]
    }
}

/// Sum the matchup tables of every present creature.
///
/// Empty slots contribute nothing; a team with no members sums to zero
/// everywhere. The first member whose table cannot be computed aborts the
/// whole aggregation.
pub fn aggregate<L>(slots: &[Option<Creature>], relations: &L) -> Result<TeamMatchups, TeamError>
where
    L: RelationLookup + ?Sized,
{
    if slots.len() > TEAM_SIZE {
        return Err(TeamError::TooManyMembers(slots.len()));
    }

    let mut totals = [0.0; TYPE_COUNT];
    let mut members = 0;

    for (slot, creature) in slots.iter().enumerate() {
        let Some(creature) = creature else {
            continue;
        };
        let table = creature
            .matchups(relations)
            .map_err(|source| TeamError::Matchup { slot, source })?;

        for (attacker, multiplier) in table.iter() {
            totals[attacker.index()] += multiplier;
        }
        members += 1;
    }

    Ok(TeamMatchups { totals, members })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use typedex_matchup::{MatchupError, RelationChart, TypeRelations};

    #[test]
    fn test_aggregate_sums_present_members() {
        let mut map = HashMap::new();
        map.insert(AttackType::Grass, TypeRelations::new().with_double_from(&[AttackType::Fire]));
        map.insert(AttackType::Water, TypeRelations::new().with_half_from(&[AttackType::Fire]));

        let slots = [
            Some(Creature::single(AttackType::Grass)),
            None,
            None,
            Some(Creature::single(AttackType::Water)),
            None,
            None,
        ];
        let team = aggregate(&slots, &map).unwrap();

        assert_eq!(team[AttackType::Fire], 2.5);
        // Two members at 1x each
        assert_eq!(team[AttackType::Normal], 2.0);
        assert_eq!(team.members(), 2);
    }

    #[test]
    fn test_aggregate_empty_team() {
        let slots: [Option<Creature>; TEAM_SIZE] = Default::default();
        let team = aggregate(&slots, &RelationChart::standard()).unwrap();

        assert_eq!(team.members(), 0);
        assert!(team.iter().all(|(_, total)| total == 0.0));
    }

    #[test]
    fn test_aggregate_propagates_missing_data() {
        let chart = RelationChart::new();
        let slots = [None, Some(Creature::single(AttackType::Ice))];

        let result = aggregate(&slots, &chart);
        assert!(matches!(
            result,
            Err(TeamError::Matchup {
                slot: 1,
                source: MatchupError::MissingData(AttackType::Ice)
            })
        ));
    }

    #[test]
    fn test_aggregate_rejects_oversized() {
        let slots: Vec<Option<Creature>> = vec![None; 8];
        let result = aggregate(&slots, &RelationChart::standard());
        assert!(matches!(result, Err(TeamError::TooManyMembers(8))));
    }

    #[test]
    fn test_ground_immunity_counts_as_zero() {
        let chart = RelationChart::standard();
        let slots = [
            Some(Creature::single(AttackType::Electric)),
            Some(Creature::single(AttackType::Electric).with_ground_immunity(true)),
        ];
        let team = aggregate(&slots, &chart).unwrap();
        assert_eq!(team[AttackType::Ground], 2.0);
    }

    #[test]
    fn test_threats_ranking() {
        let chart = RelationChart::standard();
        let slots = [
            Some(Creature::single(AttackType::Grass)),
            Some(Creature::single(AttackType::Steel)),
        ];
        let team = aggregate(&slots, &chart).unwrap();
        let threats = team.threats();

        // Fire: 2 (grass) + 2 (steel)
        assert_eq!(threats[0], (AttackType::Fire, 4.0));
        assert_eq!(threats.len(), 18);
        assert!(threats.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
