use rand::Rng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    index: usize,
    multiplicity: usize,
}

/// A multiset supporting uniform random picks and O(1) removal by value.
///
/// Distinct items are kept densely packed in a vector. A side table maps every
/// item to its position in that vector and to its multiplicity, so removal can
/// swap the last item into the freed position instead of shifting.
///
/// Random picks are uniform over *distinct* items; multiplicities are carried
/// along but never weight the draw.
#[derive(Debug, Clone)]
pub struct RandomMultiset<T> {
    items: Vec<T>,
    slots: HashMap<T, Slot>,
}

impl<T> Default for RandomMultiset<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T> RandomMultiset<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `multiplicity` copies of `item`. A new item is appended at the end;
    /// an existing item only has its multiplicity increased.
    pub fn add(&mut self, item: T, multiplicity: usize) {
        if let Some(slot) = self.slots.get_mut(&item) {
            slot.multiplicity += multiplicity;
            return;
        }
        let slot = Slot {
            index: self.items.len(),
            multiplicity,
        };
        self.items.push(item.clone());
        self.slots.insert(item, slot);
    }

    /// Removes every copy of `item` and returns its multiplicity before removal.
    pub fn remove_all(&mut self, item: &T) -> Result<usize>
    where
        T: Debug,
    {
        let slot = self
            .slots
            .remove(item)
            .ok_or_else(|| GraphError::ItemNotFound(format!("{:?}", item)))?;
        self.items.swap_remove(slot.index);
        // The former last item now lives in the freed position.
        if let Some(moved) = self.items.get(slot.index) {
            if let Some(moved_slot) = self.slots.get_mut(moved) {
                moved_slot.index = slot.index;
            }
        }
        Ok(slot.multiplicity)
    }

    /// Picks one distinct item with equal probability, or `None` when empty.
    pub fn pick_uniform_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.items.len());
        self.items.get(index)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Multiplicity of `item`, `None` if absent.
    pub fn multiplicity(&self, item: &T) -> Option<usize> {
        self.slots.get(item).map(|slot| slot.multiplicity)
    }

    /// Sum of the multiplicities of all items.
    pub fn total_multiplicity(&self) -> usize {
        self.slots.values().map(|slot| slot.multiplicity).sum()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the distinct items in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for RandomMultiset<T>
where
    T: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = RandomMultiset::new();
        for item in iter {
            multiset.add(item, 1);
        }
        multiset
    }
}

impl<'a, T> IntoIterator for &'a RandomMultiset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
