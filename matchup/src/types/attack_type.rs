//! The 18 canonical elemental types

use std::fmt;
use std::str::FromStr;

use crate::error::MatchupError;

/// Elemental types (18 types as of Gen 6+)
///
/// Discriminants follow the data API's type ids minus one, so
/// `Normal` is id 1 and `Fairy` is id 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum AttackType {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

/// Number of canonical types
pub const TYPE_COUNT: usize = 18;

impl AttackType {
    /// All 18 types in canonical order
    pub const ALL: [AttackType; TYPE_COUNT] = [
        AttackType::Normal,
        AttackType::Fighting,
        AttackType::Flying,
        AttackType::Poison,
        AttackType::Ground,
        AttackType::Rock,
        AttackType::Bug,
        AttackType::Ghost,
        AttackType::Steel,
        AttackType::Fire,
        AttackType::Water,
        AttackType::Grass,
        AttackType::Electric,
        AttackType::Psychic,
        AttackType::Ice,
        AttackType::Dragon,
        AttackType::Dark,
        AttackType::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [AttackType] {
        &Self::ALL
    }

    /// Position of this type in [`AttackType::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a type by its data API id (1..=18)
    pub fn from_api_id(id: u8) -> Option<Self> {
        let index = usize::from(id.checked_sub(1)?);
        Self::ALL.get(index).copied()
    }

    /// The data API id of this type
    pub fn api_id(self) -> u8 {
        self as u8 + 1
    }

    /// Parse from an API name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(AttackType::Normal),
            "fighting" => Some(AttackType::Fighting),
            "flying" => Some(AttackType::Flying),
            "poison" => Some(AttackType::Poison),
            "ground" => Some(AttackType::Ground),
            "rock" => Some(AttackType::Rock),
            "bug" => Some(AttackType::Bug),
            "ghost" => Some(AttackType::Ghost),
            "steel" => Some(AttackType::Steel),
            "fire" => Some(AttackType::Fire),
            "water" => Some(AttackType::Water),
            "grass" => Some(AttackType::Grass),
            "electric" => Some(AttackType::Electric),
            "psychic" => Some(AttackType::Psychic),
            "ice" => Some(AttackType::Ice),
            "dragon" => Some(AttackType::Dragon),
            "dark" => Some(AttackType::Dark),
            "fairy" => Some(AttackType::Fairy),
            _ => None,
        }
    }

    /// Lowercase name as used by the data API
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::Normal => "normal",
            AttackType::Fighting => "fighting",
            AttackType::Flying => "flying",
            AttackType::Poison => "poison",
            AttackType::Ground => "ground",
            AttackType::Rock => "rock",
            AttackType::Bug => "bug",
            AttackType::Ghost => "ghost",
            AttackType::Steel => "steel",
            AttackType::Fire => "fire",
            AttackType::Water => "water",
            AttackType::Grass => "grass",
            AttackType::Electric => "electric",
            AttackType::Psychic => "psychic",
            AttackType::Ice => "ice",
            AttackType::Dragon => "dragon",
            AttackType::Dark => "dark",
            AttackType::Fairy => "fairy",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            AttackType::Normal => "Normal",
            AttackType::Fighting => "Fighting",
            AttackType::Flying => "Flying",
            AttackType::Poison => "Poison",
            AttackType::Ground => "Ground",
            AttackType::Rock => "Rock",
            AttackType::Bug => "Bug",
            AttackType::Ghost => "Ghost",
            AttackType::Steel => "Steel",
            AttackType::Fire => "Fire",
            AttackType::Water => "Water",
            AttackType::Grass => "Grass",
            AttackType::Electric => "Electric",
            AttackType::Psychic => "Psychic",
            AttackType::Ice => "Ice",
            AttackType::Dragon => "Dragon",
            AttackType::Dark => "Dark",
            AttackType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AttackType {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MatchupError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_name() {
        assert_eq!(AttackType::from_name("fire"), Some(AttackType::Fire));
        assert_eq!(AttackType::from_name("Fire"), Some(AttackType::Fire));
        assert_eq!(AttackType::from_name(" PSYCHIC "), Some(AttackType::Psychic));
        assert_eq!(AttackType::from_name("shadow"), None);
        assert_eq!(AttackType::from_name(""), None);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("ground".parse::<AttackType>().unwrap(), AttackType::Ground);
        assert!(matches!(
            "stellar".parse::<AttackType>(),
            Err(MatchupError::UnknownType(name)) if name == "stellar"
        ));
    }

    #[test]
    fn test_type_api_ids() {
        assert_eq!(AttackType::from_api_id(1), Some(AttackType::Normal));
        assert_eq!(AttackType::from_api_id(18), Some(AttackType::Fairy));
        assert_eq!(AttackType::from_api_id(0), None);
        assert_eq!(AttackType::from_api_id(19), None);
        for t in AttackType::all() {
            assert_eq!(AttackType::from_api_id(t.api_id()), Some(*t));
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AttackType::Electric.as_str(), "electric");
        assert_eq!(AttackType::Electric.display_name(), "Electric");
        assert_eq!(AttackType::Dark.to_string(), "Dark");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(AttackType::all().len(), 18);
        assert_eq!(AttackType::all()[0], AttackType::Normal);
        assert_eq!(AttackType::all()[17], AttackType::Fairy);
        for (i, t) in AttackType::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }
}
