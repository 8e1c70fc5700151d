//! Response types for the PokeAPI v2 resources we consume
//!
//! Only the fields needed for matchups and summaries are modelled; anything
//! else in the payload is ignored.

use serde::Deserialize;
use typedex_matchup::{AttackType, Creature, TypeRelations, TypeSet};

use crate::error::FetchError;

/// Abilities that nullify ground-type damage
pub const GROUND_IMMUNE_ABILITIES: &[&str] = &["levitate"];

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,

    #[serde(default)]
    pub url: String,
}

/// `GET /type/{id or name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeResponse {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelations,
}

impl TypeResponse {
    /// The canonical type this resource describes
    pub fn attack_type(&self) -> Result<AttackType, FetchError> {
        AttackType::from_name(&self.name).ok_or_else(|| FetchError::UnknownType(self.name.clone()))
    }
}

/// Incoming damage relations of a type.
///
/// The API also reports outgoing (`*_damage_to`) relations; those are not
/// needed to compute a defender's matchups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,

    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,

    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

impl DamageRelations {
    /// Convert to calculator input, skipping non-canonical types
    pub fn to_type_relations(&self) -> TypeRelations {
        TypeRelations {
            double_damage_from: collect_types(&self.double_damage_from),
            half_damage_from: collect_types(&self.half_damage_from),
            no_damage_from: collect_types(&self.no_damage_from),
        }
    }
}

fn collect_types(resources: &[NamedResource]) -> TypeSet {
    resources
        .iter()
        .filter_map(|r| {
            let parsed = AttackType::from_name(&r.name);
            if parsed.is_none() {
                tracing::debug!(name = %r.name, "Skipping non-canonical type in damage relations");
            }
            parsed
        })
        .collect()
}

/// `GET /pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    pub types: Vec<PokemonTypeSlot>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,

    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,

    #[serde(default)]
    pub is_hidden: bool,

    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

impl PokemonResponse {
    /// Defending types in slot order
    pub fn defending_types(&self) -> Result<Vec<AttackType>, FetchError> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);

        slots
            .into_iter()
            .map(|s| {
                AttackType::from_name(&s.kind.name)
                    .ok_or_else(|| FetchError::UnknownType(s.kind.name.clone()))
            })
            .collect()
    }

    /// Whether any listed ability nullifies ground damage
    pub fn has_ground_immunity(&self) -> bool {
        self.abilities
            .iter()
            .any(|a| GROUND_IMMUNE_ABILITIES.contains(&a.ability.name.as_str()))
    }

    /// Calculator view of this pokemon
    pub fn creature(&self) -> Result<Creature, FetchError> {
        let types = self.defending_types()?;
        Ok(Creature::new(&types, self.has_ground_immunity())?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn named(name: &str) -> serde_json::Value {
        json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/type/{name}/") })
    }

    #[test]
    fn test_parse_type_response() {
        let body = json!({
            "id": 13,
            "name": "electric",
            "damage_relations": {
                "double_damage_from": [named("ground")],
                "double_damage_to": [named("flying"), named("water")],
                "half_damage_from": [named("flying"), named("steel"), named("electric")],
                "half_damage_to": [],
                "no_damage_from": [],
                "no_damage_to": [named("ground")]
            },
            "moves": []
        });

        let response: TypeResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.attack_type().unwrap(), AttackType::Electric);

        let relations = response.damage_relations.to_type_relations();
        assert_eq!(
            relations.double_damage_from.iter().collect::<Vec<_>>(),
            vec![AttackType::Ground]
        );
        assert_eq!(relations.half_damage_from.len(), 3);
        assert!(relations.no_damage_from.is_empty());
    }

    #[test]
    fn test_non_canonical_relations_skipped() {
        let body = json!({
            "double_damage_from": [named("shadow"), named("fire")],
        });
        let relations: DamageRelations = serde_json::from_value(body).unwrap();
        let converted = relations.to_type_relations();

        assert_eq!(converted.double_damage_from.len(), 1);
        assert!(converted.double_damage_from.contains(AttackType::Fire));
    }

    #[test]
    fn test_unknown_type_resource() {
        let body = json!({ "id": 10002, "name": "shadow", "damage_relations": {} });
        let response: TypeResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(response.attack_type(), Err(FetchError::UnknownType(_))));
    }

    #[test]
    fn test_parse_pokemon_response() {
        let body = json!({
            "id": 94,
            "name": "gengar",
            "height": 15,
            "weight": 405,
            "types": [
                { "slot": 2, "type": named("poison") },
                { "slot": 1, "type": named("ghost") }
            ],
            "abilities": [
                { "ability": { "name": "cursed-body", "url": "" }, "is_hidden": false, "slot": 1 }
            ],
            "sprites": { "front_default": "front.png", "back_default": null },
            "base_experience": 250
        });

        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            response.defending_types().unwrap(),
            vec![AttackType::Ghost, AttackType::Poison]
        );
        assert!(!response.has_ground_immunity());
        assert_eq!(response.sprites.back_default, None);
    }

    #[test]
    fn test_levitate_grants_ground_immunity() {
        let body = json!({
            "id": 109,
            "name": "koffing",
            "types": [{ "slot": 1, "type": named("poison") }],
            "abilities": [
                { "ability": { "name": "levitate" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "neutralizing-gas" }, "is_hidden": false, "slot": 2 },
                { "ability": { "name": "stench" }, "is_hidden": true, "slot": 3 }
            ]
        });

        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        let creature = response.creature().unwrap();
        assert!(creature.ground_immune());
        assert_eq!(creature.types(), &[AttackType::Poison]);
    }

    #[test]
    fn test_creature_rejects_unknown_type() {
        let body = json!({
            "id": 1,
            "name": "oddity",
            "types": [{ "slot": 1, "type": named("stellar") }]
        });
        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(response.creature(), Err(FetchError::UnknownType(_))));
    }

    #[test]
    fn test_creature_rejects_missing_types() {
        let body = json!({ "id": 1, "name": "missingno", "types": [] });
        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(response.creature(), Err(FetchError::Matchup(_))));
    }
}
