//! Domain types for type matchups

mod attack_type;
mod creature;
mod relations;
mod type_set;

pub use attack_type::{AttackType, TYPE_COUNT};
pub use creature::Creature;
pub(crate) use creature::validate_defending_types;
pub use relations::TypeRelations;
pub use type_set::TypeSet;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_relations_from_json() {
        let json = r#"{
            "double_damage_from": ["ground"],
            "half_damage_from": ["flying", "steel", "electric"]
        }"#;
        let relations: TypeRelations = serde_json::from_str(json).unwrap();

        assert!(relations.double_damage_from.contains(AttackType::Ground));
        assert_eq!(relations.half_damage_from.len(), 3);
        assert!(relations.no_damage_from.is_empty());
    }

    #[test]
    fn test_creature_json_is_validated() {
        let ok: Creature =
            serde_json::from_str(r#"{"types": ["ghost", "poison"], "ground_immune": true}"#)
                .unwrap();
        assert!(ok.ground_immune());

        let dup = serde_json::from_str::<Creature>(r#"{"types": ["fire", "fire"]}"#);
        assert!(dup.is_err());
    }

    #[test]
    fn test_type_set_serializes_as_names() {
        let set = TypeSet::of(&[AttackType::Fairy, AttackType::Dragon]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["dragon","fairy"]"#);
    }
}
