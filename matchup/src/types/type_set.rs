//! Compact set of attack types

use std::fmt;

use super::attack_type::AttackType;

/// A set of [`AttackType`] values stored as a bit mask.
///
/// Iteration always yields types in canonical order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<AttackType>", into = "Vec<AttackType>")
)]
pub struct TypeSet(u32);

impl TypeSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a set holding the given types
    pub fn of(types: &[AttackType]) -> Self {
        types.iter().copied().collect()
    }

    fn bit(t: AttackType) -> u32 {
        1 << t.index()
    }

    /// Add a type, returns false if it was already present
    pub fn insert(&mut self, t: AttackType) -> bool {
        let present = self.contains(t);
        self.0 |= Self::bit(t);
        !present
    }

    /// Remove a type, returns true if it was present
    pub fn remove(&mut self, t: AttackType) -> bool {
        let present = self.contains(t);
        self.0 &= !Self::bit(t);
        present
    }

    pub fn contains(&self, t: AttackType) -> bool {
        self.0 & Self::bit(t) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in canonical order
    pub fn iter(&self) -> impl Iterator<Item = AttackType> + '_ {
        AttackType::all()
            .iter()
            .copied()
            .filter(move |t| self.contains(*t))
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<AttackType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = AttackType>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<AttackType> for TypeSet {
    fn extend<I: IntoIterator<Item = AttackType>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl From<Vec<AttackType>> for TypeSet {
    fn from(types: Vec<AttackType>) -> Self {
        types.into_iter().collect()
    }
}

impl From<TypeSet> for Vec<AttackType> {
    fn from(set: TypeSet) -> Self {
        set.iter().collect()
    }
}
