//! Fixed-capacity slotted container

use crate::item::{Item, ItemColor, Quality};
use serde::{Deserialize, Serialize};

/// An ordered list of slots, each empty or holding one item stack.
///
/// The slot list may be shorter than `capacity`; appending is allowed
/// until the slot count reaches capacity. Slot order is user-visible
/// and preserved, except that removing a vacated slot shifts later
/// slots left by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Slots (None = empty slot)
    slots: Vec<Option<Item>>,
    /// Maximum number of slots
    capacity: usize,
}

impl Container {
    /// Create a new empty container
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Create a container pre-filled with the given items
    pub fn from_items(capacity: usize, items: impl IntoIterator<Item = Item>) -> Self {
        let mut container = Self::new(capacity);
        for item in items {
            container.push(item);
        }
        container
    }

    /// Get container capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current number of slots (occupied or empty)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether a new slot can still be appended
    pub fn can_append(&self) -> bool {
        self.slots.len() < self.capacity
    }

    /// Get number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if no slot holds an item
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Get slot contents
    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot)?.as_ref()
    }

    /// Get mutable slot contents
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Item> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Append a new occupied slot. Returns false when at capacity.
    pub fn push(&mut self, item: Item) -> bool {
        if !self.can_append() {
            return false;
        }
        self.slots.push(Some(item));
        true
    }

    /// Remove a slot entirely, shifting later slots left by one
    pub fn remove_slot(&mut self, slot: usize) -> Option<Item> {
        if slot >= self.slots.len() {
            return None;
        }
        self.slots.remove(slot)
    }

    /// Take the item out of a slot, leaving the slot empty in place
    pub fn clear_slot(&mut self, slot: usize) -> Option<Item> {
        self.slots.get_mut(slot)?.take()
    }

    /// Place an item into an existing empty slot. Returns false if the
    /// slot does not exist or is occupied.
    pub fn fill_slot(&mut self, slot: usize, item: Item) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) if s.is_none() => {
                *s = Some(item);
                true
            }
            _ => false,
        }
    }

    /// Find the first empty slot
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Iterate over occupied slots
    pub fn items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    /// Total quantity of items matching the given identity
    pub fn quantity_of(&self, type_id: i32, quality: Quality, color: Option<ItemColor>) -> u32 {
        self.items()
            .filter(|(_, item)| {
                item.type_id == type_id && item.quality == quality && item.color == color
            })
            .map(|(_, item)| item.stack)
            .sum()
    }

    /// Total quantity across all slots, regardless of identity
    pub fn total_quantity(&self) -> u32 {
        self.items().map(|(_, item)| item.stack).sum()
    }
}
