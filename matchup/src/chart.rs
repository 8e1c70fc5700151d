//! Damage relation lookup and the standard type chart

use std::collections::{BTreeMap, HashMap};

use crate::types::{AttackType, TYPE_COUNT, TypeRelations};

/// Source of damage relations keyed by defending type.
pub trait RelationLookup {
    /// Relations for `defending`, or `None` if they were not supplied
    fn relations(&self, defending: AttackType) -> Option<&TypeRelations>;
}

impl RelationLookup for HashMap<AttackType, TypeRelations> {
    fn relations(&self, defending: AttackType) -> Option<&TypeRelations> {
        self.get(&defending)
    }
}

impl RelationLookup for BTreeMap<AttackType, TypeRelations> {
    fn relations(&self, defending: AttackType) -> Option<&TypeRelations> {
        self.get(&defending)
    }
}

impl<L: RelationLookup + ?Sized> RelationLookup for &L {
    fn relations(&self, defending: AttackType) -> Option<&TypeRelations> {
        (**self).relations(defending)
    }
}

/// Fixed-size table of damage relations, one optional slot per defending type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationChart {
    slots: [Option<TypeRelations>; TYPE_COUNT],
}

impl RelationChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self::default()
    }

    /// The Gen 6+ chart as published by the data API
    pub fn standard() -> Self {
        standard::RELATIONS
            .iter()
            .map(|row| (row.0, row_relations(row)))
            .collect()
    }

    /// Store relations for a defending type, returning the previous entry
    pub fn insert(
        &mut self,
        defending: AttackType,
        relations: TypeRelations,
    ) -> Option<TypeRelations> {
        self.slots[defending.index()].replace(relations)
    }

    pub fn get(&self, defending: AttackType) -> Option<&TypeRelations> {
        self.slots[defending.index()].as_ref()
    }

    /// Number of defending types with relations
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every defending type has relations
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl RelationLookup for RelationChart {
    fn relations(&self, defending: AttackType) -> Option<&TypeRelations> {
        self.get(defending)
    }
}

impl FromIterator<(AttackType, TypeRelations)> for RelationChart {
    fn from_iter<I: IntoIterator<Item = (AttackType, TypeRelations)>>(iter: I) -> Self {
        let mut chart = Self::new();
        for (defending, relations) in iter {
            chart.insert(defending, relations);
        }
        chart
    }
}

type RelationRow = (
    AttackType,
    &'static [AttackType],
    &'static [AttackType],
    &'static [AttackType],
);

fn row_relations((_, double, half, none): &RelationRow) -> TypeRelations {
    TypeRelations::new()
        .with_double_from(double)
        .with_half_from(half)
        .with_none_from(none)
}

mod standard {
    use super::RelationRow;
    use crate::types::AttackType::*;

    /// Defending type, then attackers dealing 2x, 0.5x and 0x
    #[rustfmt::skip]
    pub(super) static RELATIONS: &[RelationRow] = &[
        (Normal,   &[Fighting], &[], &[Ghost]),
        (Fighting, &[Flying, Psychic, Fairy], &[Rock, Bug, Dark], &[]),
        (Flying,   &[Rock, Electric, Ice], &[Fighting, Bug, Grass], &[Ground]),
        (Poison,   &[Ground, Psychic], &[Fighting, Poison, Bug, Grass, Fairy], &[]),
        (Ground,   &[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
        (Rock,     &[Fighting, Ground, Steel, Water, Grass], &[Normal, Flying, Poison, Fire], &[]),
        (Bug,      &[Flying, Rock, Fire], &[Fighting, Ground, Grass], &[]),
        (Ghost,    &[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
        (Steel,    &[Fighting, Ground, Fire], &[Normal, Flying, Rock, Bug, Steel, Grass, Psychic, Ice, Dragon, Fairy], &[Poison]),
        (Fire,     &[Ground, Rock, Water], &[Bug, Steel, Fire, Grass, Ice, Fairy], &[]),
        (Water,    &[Grass, Electric], &[Steel, Fire, Water, Ice], &[]),
        (Grass,    &[Flying, Poison, Bug, Fire, Ice], &[Ground, Water, Grass, Electric], &[]),
        (Electric, &[Ground], &[Flying, Steel, Electric], &[]),
        (Psychic,  &[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
        (Ice,      &[Fighting, Rock, Steel, Fire], &[Ice], &[]),
        (Dragon,   &[Ice, Dragon, Fairy], &[Fire, Water, Grass, Electric], &[]),
        (Dark,     &[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
        (Fairy,    &[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
    ];
}

impl AttackType {
    /// Effectiveness of this attacking type against a single defending type
    pub fn effectiveness(&self, defender: AttackType) -> f32 {
        standard::RELATIONS
            .iter()
            .find(|(defending, ..)| *defending == defender)
            .map(|row| row_relations(row).multiplier_from(*self))
            .unwrap_or(1.0)
    }

    /// Effectiveness against multiple defending types (multiplied)
    pub fn effectiveness_multi(&self, defenders: &[AttackType]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t))
            .product()
    }
}
