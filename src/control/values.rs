// SPDX-License-Identifier: MPL-2.0
//! Ordered item storage with a bounds-safe selection index.

use crate::control::item::SpinnerItem;

/// The values displayed by a spinner, in display order (clockwise from the
/// configured reference angle), plus the active selection.
///
/// The selection index is re-clamped after every mutation, so it is always
/// inside `[0, len)` while the list is non-empty and pinned to `0` when the
/// list is empty. No operation here panics on an out-of-range index.
#[derive(Debug, Clone)]
pub struct ValueList<P> {
    items: Vec<SpinnerItem<P>>,
    selected: usize,
}

impl<P> Default for ValueList<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }
}

impl<P> ValueList<P> {
    /// Creates a list with the selection on the first item.
    #[must_use]
    pub fn new(items: Vec<SpinnerItem<P>>) -> Self {
        Self { items, selected: 0 }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in display order.
    #[must_use]
    pub fn items(&self) -> &[SpinnerItem<P>] {
        &self.items
    }

    /// The active selection index. Meaningless (always `0`) when empty.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn current(&self) -> Option<&SpinnerItem<P>> {
        self.items.get(self.selected)
    }

    /// The item at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SpinnerItem<P>> {
        self.items.get(index)
    }

    /// Finds the display index of an item by equality.
    #[must_use]
    pub fn index_of(&self, item: &SpinnerItem<P>) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Replaces the whole list, clamping the selection into the new bounds.
    pub fn set_items(&mut self, items: Vec<SpinnerItem<P>>) {
        self.items = items;
        self.clamp_selection();
    }

    /// Moves the selection to `index` (clamped). Returns whether the
    /// selection actually changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.items.is_empty() {
            self.selected = 0;
            return false;
        }
        let clamped = index.min(self.items.len() - 1);
        if clamped == self.selected {
            return false;
        }
        self.selected = clamped;
        true
    }

    /// Moves the selection to a raw, possibly negative or oversized index,
    /// wrapped into `[0, len)`. Returns whether the selection changed.
    pub fn select_wrapped(&mut self, raw: i64) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let index = self.wrapped(raw);
        self.select(index)
    }

    /// Wraps a raw index into `[0, len)` by repeated add/subtract of the
    /// item count. Returns `0` for an empty list.
    #[must_use]
    pub fn wrapped(&self, raw: i64) -> usize {
        let count = self.items.len() as i64;
        if count == 0 {
            return 0;
        }
        let mut index = raw;
        while index >= count {
            index -= count;
        }
        while index < 0 {
            index += count;
        }
        index as usize
    }

    /// Inserts an item at `index` (clamped to the list length).
    pub fn insert(&mut self, index: usize, item: SpinnerItem<P>) {
        let at = index.min(self.items.len());
        self.items.insert(at, item);
        self.clamp_selection();
    }

    /// Removes and returns the item at `index`, if in range.
    pub fn remove(&mut self, index: usize) -> Option<SpinnerItem<P>> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    /// Removes up to `n` items from the front.
    pub fn remove_first(&mut self, n: usize) {
        let n = n.min(self.items.len());
        self.items.drain(..n);
        self.clamp_selection();
    }

    /// Removes up to `n` items from the back.
    pub fn remove_last(&mut self, n: usize) {
        let n = n.min(self.items.len());
        let keep = self.items.len() - n;
        self.items.truncate(keep);
        self.clamp_selection();
    }

    /// Removes every item. The selection pins to `0`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        if self.items.is_empty() {
            self.selected = 0;
        }
    }
}
