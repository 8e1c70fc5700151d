//! Team roster of creatures

use typedex_matchup::{Creature, RelationLookup};

use crate::aggregate::{TeamMatchups, aggregate};
use crate::error::TeamError;

/// Number of slots on a team
pub const TEAM_SIZE: usize = 6;

/// A team of up to six creatures; any slot may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    slots: [Option<Creature>; TEAM_SIZE],
}

impl Team {
    /// Create an empty team
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a team from slot contents in order
    ///
    /// Fewer than six slots leaves the rest empty.
    pub fn from_slots<I>(slots: I) -> Result<Self, TeamError>
    where
        I: IntoIterator<Item = Option<Creature>>,
    {
        let slots: Vec<_> = slots.into_iter().collect();
        if slots.len() > TEAM_SIZE {
            return Err(TeamError::TooManyMembers(slots.len()));
        }

        let mut team = Self::new();
        for (slot, creature) in slots.into_iter().enumerate() {
            team.slots[slot] = creature;
        }
        Ok(team)
    }

    /// Put a creature in a slot (or empty it), returns the previous occupant
    pub fn set(
        &mut self,
        slot: usize,
        creature: Option<Creature>,
    ) -> Result<Option<Creature>, TeamError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(TeamError::SlotOutOfRange(slot))?;
        Ok(std::mem::replace(entry, creature))
    }

    /// Empty a slot, returns the previous occupant
    pub fn clear(&mut self, slot: usize) -> Result<Option<Creature>, TeamError> {
        self.set(slot, None)
    }

    /// Get the creature in a slot
    pub fn get(&self, slot: usize) -> Option<&Creature> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// All slots, including empty ones
    pub fn slots(&self) -> &[Option<Creature>] {
        &self.slots
    }

    /// Present members with their slot index
    pub fn members(&self) -> impl Iterator<Item = (usize, &Creature)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| c.as_ref().map(|c| (slot, c)))
    }

    /// Number of present members
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate the matchups of every present member
    pub fn matchups<L>(&self, relations: &L) -> Result<TeamMatchups, TeamError>
    where
        L: RelationLookup + ?Sized,
    {
        aggregate(&self.slots, relations)
    }
}
