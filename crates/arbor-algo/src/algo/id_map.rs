// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between host node ids and dense algorithm slots.
//!
//! Graph algorithms want dense integer indices (0..V) for array-based state.
//! Host graphs identify nodes by arbitrary string or integer ids. This module
//! provides the bidirectional mapping between the two.

use arbor_common::NodeId;
use fxhash::FxHashMap;

/// Bidirectional mapping between [`NodeId`]s and dense slots.
///
/// Slots are assigned in insertion order, so building from the host graph's
/// node iterator yields a deterministic layout.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert(NodeId::from("a"));  // slot 0
/// id_map.insert(NodeId::from(7));    // slot 1
///
/// assert_eq!(id_map.to_slot(&NodeId::from("a")), Some(0));
/// assert_eq!(id_map.to_id(1), Some(&NodeId::from(7)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> node id
    slot_to_id: Vec<NodeId>,
    /// Node id -> dense slot
    id_to_slot: FxHashMap<NodeId, u32>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_id: Vec::with_capacity(capacity),
            id_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert an id and return its slot.
    ///
    /// If the id already exists, returns the existing slot.
    pub fn insert(&mut self, id: NodeId) -> u32 {
        if let Some(&slot) = self.id_to_slot.get(&id) {
            return slot;
        }
        let slot = self.slot_to_id.len() as u32;
        self.id_to_slot.insert(id.clone(), slot);
        self.slot_to_id.push(id);
        slot
    }

    #[inline]
    pub fn to_slot(&self, id: &NodeId) -> Option<u32> {
        self.id_to_slot.get(id).copied()
    }

    #[inline]
    pub fn to_id(&self, slot: u32) -> Option<&NodeId> {
        self.slot_to_id.get(slot as usize)
    }

    /// Get the id for a slot (panics if out of bounds).
    #[inline]
    pub fn to_id_unchecked(&self, slot: u32) -> &NodeId {
        &self.slot_to_id[slot as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_id.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.id_to_slot.contains_key(id)
    }

    /// Iterate over all (slot, id) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &NodeId)> + '_ {
        self.slot_to_id
            .iter()
            .enumerate()
            .map(|(slot, id)| (slot as u32, id))
    }
}

impl FromIterator<NodeId> for IdMap {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));
        for id in iter {
            map.insert(id);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = IdMap::new();

        let a = NodeId::from("a");
        let b = NodeId::from(2);
        let c = NodeId::from("c");

        assert_eq!(map.insert(a.clone()), 0);
        assert_eq!(map.insert(b.clone()), 1);
        assert_eq!(map.insert(c.clone()), 2);

        // Duplicate insert returns same slot
        assert_eq!(map.insert(a.clone()), 0);

        assert_eq!(map.to_slot(&b), Some(1));
        assert_eq!(map.to_id(2), Some(&c));
        assert_eq!(map.to_id(3), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_int_and_string_ids_are_distinct() {
        let map: IdMap = vec![NodeId::from(1), NodeId::from("1")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert!(map.contains(&NodeId::Int(1)));
        assert!(map.contains(&NodeId::from("1")));
    }
}
