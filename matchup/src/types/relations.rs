//! Per-type damage relations

use super::attack_type::AttackType;
use super::type_set::TypeSet;

/// Damage relations for a single defending type.
///
/// Each set lists the attacking types that deal 2x, 0.5x or 0x damage
/// to something of this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRelations {
    #[cfg_attr(feature = "serde", serde(default))]
    pub double_damage_from: TypeSet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub half_damage_from: TypeSet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub no_damage_from: TypeSet,
}

impl TypeRelations {
    /// Relations with every attacker neutral
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_double_from(mut self, types: &[AttackType]) -> Self {
        self.double_damage_from.extend(types.iter().copied());
        self
    }

    pub fn with_half_from(mut self, types: &[AttackType]) -> Self {
        self.half_damage_from.extend(types.iter().copied());
        self
    }

    pub fn with_none_from(mut self, types: &[AttackType]) -> Self {
        self.no_damage_from.extend(types.iter().copied());
        self
    }

    /// Multiplier applied to damage from `attacker` against this type alone
    pub fn multiplier_from(&self, attacker: AttackType) -> f32 {
        let mut multiplier = 1.0;
        if self.double_damage_from.contains(attacker) {
            multiplier *= 2.0;
        }
        if self.half_damage_from.contains(attacker) {
            multiplier *= 0.5;
        }
        if self.no_damage_from.contains(attacker) {
            multiplier *= 0.0;
        }
        multiplier
    }

    /// Whether any of the three sets mentions `attacker`
    pub fn mentions(&self, attacker: AttackType) -> bool {
        self.double_damage_from.contains(attacker)
            || self.half_damage_from.contains(attacker)
            || self.no_damage_from.contains(attacker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_from() {
        let electric = TypeRelations::new()
            .with_double_from(&[AttackType::Ground])
            .with_half_from(&[AttackType::Flying, AttackType::Steel, AttackType::Electric]);

        assert_eq!(electric.multiplier_from(AttackType::Ground), 2.0);
        assert_eq!(electric.multiplier_from(AttackType::Steel), 0.5);
        assert_eq!(electric.multiplier_from(AttackType::Water), 1.0);
    }

    #[test]
    fn test_multiplier_from_multiple_sets() {
        let odd = TypeRelations::new()
            .with_double_from(&[AttackType::Fire])
            .with_half_from(&[AttackType::Fire])
            .with_none_from(&[AttackType::Ice])
            .with_double_from(&[AttackType::Ice]);

        assert_eq!(odd.multiplier_from(AttackType::Fire), 1.0);
        assert_eq!(odd.multiplier_from(AttackType::Ice), 0.0);
    }

    #[test]
    fn test_mentions() {
        let normal = TypeRelations::new()
            .with_double_from(&[AttackType::Fighting])
            .with_none_from(&[AttackType::Ghost]);

        assert!(normal.mentions(AttackType::Ghost));
        assert!(normal.mentions(AttackType::Fighting));
        assert!(!normal.mentions(AttackType::Fire));
    }
}
