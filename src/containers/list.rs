//! Singly linked list with positional insert/delete animation hooks
//!
//! Stored as a vector of identified slots; the node identity (not the index)
//! is what animations key on, since indices shift on every insert or delete.

use std::time::Instant;

use super::{clear_due_flash, FlashTimer, NodeId, Slot};

/// Default node values shown when the page opens.
pub const DEFAULT_NODES: [&str; 3] = ["Head", "Node1", "Tail"];

/// An ordered list of string-valued nodes supporting insertion and removal
/// at an arbitrary index.
pub struct LinkedList {
    slots: Vec<Slot>,
    next_id: u64,
    epoch: u64,
    flash: Vec<FlashTimer>,
    last_op: String,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            next_id: 1,
            epoch: 0,
            flash: Vec::new(),
            last_op: String::new(),
        }
    }

    /// List pre-populated with the page defaults.
    pub fn with_defaults() -> Self {
        let mut list = LinkedList::new();
        let now = Instant::now();
        for value in DEFAULT_NODES {
            list.append(value, now);
        }
        // Defaults appear without an entrance animation.
        list.poll_flash(now + super::FLASH_DURATION);
        list.last_op = String::new();
        list
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.value())
    }

    /// Description of the most recent operation, including reported failures.
    pub fn last_op(&self) -> &str {
        &self.last_op
    }

    /// Insert a value at `index`, shifting later nodes up by one.
    /// `index == len` appends. Out-of-bounds indices are reported no-ops.
    pub fn insert_at(&mut self, index: usize, value: &str, now: Instant) -> bool {
        if index > self.slots.len() {
            self.last_op = format!(
                "Invalid position {} for insertion (list has {} nodes)",
                index,
                self.slots.len()
            );
            return false;
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.slots.insert(index, Slot::new(id, value.to_string()));
        self.flash.push(FlashTimer::arm(id, self.epoch, now));
        self.last_op = format!("Inserted \"{}\" at position {}", value, index);
        true
    }

    /// Delete the node at `index`, shifting later nodes down by one.
    /// Out-of-bounds indices are reported no-ops.
    pub fn delete_at(&mut self, index: usize) -> Option<String> {
        if index >= self.slots.len() {
            self.last_op = format!(
                "Invalid position {} for deletion (list has {} nodes)",
                index,
                self.slots.len()
            );
            return None;
        }
        let slot = self.slots.remove(index);
        self.last_op = format!("Deleted \"{}\" from position {}", slot.value(), index);
        Some(slot.elem.value)
    }

    /// Insert at the head.
    pub fn prepend(&mut self, value: &str, now: Instant) {
        self.insert_at(0, value, now);
        self.last_op = format!("Prepended \"{}\" to the beginning of the list", value);
    }

    /// Insert at the tail.
    pub fn append(&mut self, value: &str, now: Instant) {
        let index = self.slots.len();
        self.insert_at(index, value, now);
        self.last_op = format!("Appended \"{}\" to the end of the list", value);
    }

    /// Remove everything and invalidate any pending flash clear.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.epoch += 1;
        self.flash.clear();
        self.last_op = String::from("Linked list cleared");
    }

    /// Clear due flash flags. Called once per UI frame.
    pub fn poll_flash(&mut self, now: Instant) {
        clear_due_flash(self.slots.iter_mut(), &mut self.flash, self.epoch, now);
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}
