//! Backing store: the growable sequence every list ultimately writes to.

use crate::element::Element;
use crate::error::{Error, Result};

/// Capacity reserved on the first growth of an empty store.
pub const DEFAULT_CAPACITY: usize = 4;

/// Growable, zero-indexed sequence of elements.
///
/// `version` counts structural changes (anything that moves the append
/// position). Replacing an element in place does not bump it.
#[derive(Debug, Default)]
pub(crate) struct Store {
    items: Vec<Element>,
    version: u64,
}

impl Store {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            version: 0,
        }
    }

    pub(crate) fn from_vec(items: Vec<Element>) -> Self {
        Self { items, version: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub(crate) fn as_slice(&self) -> &[Element] {
        &self.items
    }

    pub(crate) fn get(&self, index: usize) -> Result<Element> {
        self.items
            .get(index)
            .cloned()
            .ok_or_else(|| Error::index("index", index))
    }

    pub(crate) fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index("index", index))?;
        *slot = value;
        Ok(())
    }

    pub(crate) fn push(&mut self, value: Element) -> usize {
        self.grow_for(1);
        self.items.push(value);
        self.version += 1;
        self.items.len() - 1
    }

    pub(crate) fn insert(&mut self, index: usize, value: Element) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::index("index", index));
        }
        self.grow_for(1);
        self.items.insert(index, value);
        self.version += 1;
        Ok(())
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<Element> {
        if index >= self.items.len() {
            return Err(Error::index("index", index));
        }
        let removed = self.items.remove(index);
        self.version += 1;
        Ok(removed)
    }

    pub(crate) fn position(&self, value: &Element) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.version += 1;
    }

    /// Resize the allocation to exactly `capacity` slots.
    pub(crate) fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        let count = self.items.len();
        if capacity < count {
            return Err(Error::CapacityTooSmall {
                requested: capacity,
                count,
            });
        }
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - count);
        } else {
            self.items.shrink_to(capacity);
        }
        Ok(())
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    // Doubling growth starting at DEFAULT_CAPACITY, so capacity() reports a
    // predictable value instead of whatever Vec's own policy picks.
    fn grow_for(&mut self, additional: usize) {
        let needed = self.items.len() + additional;
        let capacity = self.items.capacity();
        if needed <= capacity {
            return;
        }
        let target = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity.saturating_mul(2)
        }
        .max(needed);
        self.items.reserve_exact(target - self.items.len());
    }
}
