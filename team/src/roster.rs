//! Unresolved team description

use serde::{Deserialize, Serialize};

use crate::error::TeamError;
use crate::team::TEAM_SIZE;

/// Six optional member names, as entered before they are looked up.
///
/// Serialized as a JSON object with a `members` array; blank names are
/// treated as empty slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoster")]
pub struct Roster {
    members: Vec<Option<String>>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            members: vec![None; TEAM_SIZE],
        }
    }

    /// Build a roster from names in slot order; blank names become empty slots
    pub fn from_names<I, S>(names: I) -> Result<Self, TeamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members: Vec<_> = names.into_iter().map(|n| normalize_slot(n.as_ref())).collect();
        Self::from_members(members)
    }

    /// Parse a roster from JSON
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the roster to JSON
    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_members(mut members: Vec<Option<String>>) -> Result<Self, TeamError> {
        if members.len() > TEAM_SIZE {
            return Err(TeamError::TooManyMembers(members.len()));
        }
        members.resize(TEAM_SIZE, None);
        Ok(Self { members })
    }

    /// Name in a slot, if any
    pub fn name(&self, slot: usize) -> Option<&str> {
        self.members.get(slot).and_then(|m| m.as_deref())
    }

    /// Present names with their slot index
    pub fn names(&self) -> impl Iterator<Item = (usize, &str)> {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(slot, m)| m.as_deref().map(|n| (slot, n)))
    }

    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct RawRoster {
    #[serde(default)]
    members: Vec<Option<String>>,
}

impl TryFrom<RawRoster> for Roster {
    type Error = TeamError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        let members = raw
            .members
            .into_iter()
            .map(|m| m.and_then(|n| normalize_slot(&n)))
            .collect();
        Roster::from_members(members)
    }
}

fn normalize_slot(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
