//! Defending creature description

use super::attack_type::AttackType;
use crate::error::MatchupError;

/// A creature as seen by the calculator: one or two distinct defending
/// types plus whether an ability makes it immune to ground damage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCreature")
)]
pub struct Creature {
    types: Vec<AttackType>,
    ground_immune: bool,
}

impl Creature {
    /// Create a creature, validating its type list
    pub fn new(types: &[AttackType], ground_immune: bool) -> Result<Self, MatchupError> {
        validate_defending_types(types)?;
        Ok(Self {
            types: types.to_vec(),
            ground_immune,
        })
    }

    /// A single-typed creature without ground immunity
    pub fn single(t: AttackType) -> Self {
        Self {
            types: vec![t],
            ground_immune: false,
        }
    }

    /// A dual-typed creature without ground immunity
    pub fn dual(primary: AttackType, secondary: AttackType) -> Result<Self, MatchupError> {
        Self::new(&[primary, secondary], false)
    }

    /// Set the ground immunity flag
    pub fn with_ground_immunity(mut self, ground_immune: bool) -> Self {
        self.ground_immune = ground_immune;
        self
    }

    /// Defending types in slot order
    pub fn types(&self) -> &[AttackType] {
        &self.types
    }

    pub fn ground_immune(&self) -> bool {
        self.ground_immune
    }

    pub fn has_type(&self, t: AttackType) -> bool {
        self.types.contains(&t)
    }
}

/// Check that a defending type list has one or two distinct entries
pub(crate) fn validate_defending_types(types: &[AttackType]) -> Result<(), MatchupError> {
    match types {
        [] => Err(MatchupError::InvalidInput(
            "at least one defending type is required".to_string(),
        )),
        [_] => Ok(()),
        [a, b] if a == b => Err(MatchupError::InvalidInput(format!(
            "duplicate defending type {a}"
        ))),
        [_, _] => Ok(()),
        _ => Err(MatchupError::InvalidInput(format!(
            "expected at most two defending types, got {}",
            types.len()
        ))),
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCreature {
    types: Vec<AttackType>,
    #[serde(default)]
    ground_immune: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCreature> for Creature {
    type Error = MatchupError;

    fn try_from(raw: RawCreature) -> Result<Self, Self::Error> {
        Creature::new(&raw.types, raw.ground_immune)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_new() {
        let swampert = Creature::new(&[AttackType::Water, AttackType::Ground], false).unwrap();
        assert_eq!(swampert.types(), &[AttackType::Water, AttackType::Ground]);
        assert!(swampert.has_type(AttackType::Ground));
        assert!(!swampert.ground_immune());
    }

    #[test]
    fn test_creature_rejects_empty() {
        assert!(matches!(
            Creature::new(&[], false),
            Err(MatchupError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_creature_rejects_three_types() {
        let result = Creature::new(
            &[AttackType::Fire, AttackType::Water, AttackType::Grass],
            false,
        );
        assert!(matches!(result, Err(MatchupError::InvalidInput(_))));
    }

    #[test]
    fn test_creature_rejects_duplicates() {
        let result = Creature::dual(AttackType::Ghost, AttackType::Ghost);
        assert!(matches!(result, Err(MatchupError::InvalidInput(_))));
    }

    #[test]
    fn test_with_ground_immunity() {
        let gengar = Creature::dual(AttackType::Ghost, AttackType::Poison)
            .unwrap()
            .with_ground_immunity(true);
        assert!(gengar.ground_immune());
    }
}
