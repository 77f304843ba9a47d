//! FIFO queue with enqueue/dequeue animation hooks

use std::collections::VecDeque;
use std::time::Instant;

use super::{clear_due_flash, FlashTimer, NodeId, Slot};

/// A queue of string values. Insertion happens at the rear, removal at the
/// front.
pub struct Queue {
    slots: VecDeque<Slot>,
    next_id: u64,
    epoch: u64,
    flash: Vec<FlashTimer>,
    last_op: String,
}

impl Queue {
    pub fn new() -> Self {
        Queue {
            slots: VecDeque::new(),
            next_id: 1,
            epoch: 0,
            flash: Vec::new(),
            last_op: String::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Description of the most recent operation, including reported failures.
    pub fn last_op(&self) -> &str {
        &self.last_op
    }

    /// Add a value at the rear of the queue.
    pub fn enqueue(&mut self, value: &str, now: Instant) {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.slots.push_back(Slot::new(id, value.to_string()));
        self.flash.push(FlashTimer::arm(id, self.epoch, now));
        self.last_op = format!("Enqueued \"{}\" to the queue", value);
    }

    /// Remove the front value. Dequeuing an empty queue is a reported no-op.
    pub fn dequeue(&mut self) -> Option<String> {
        match self.slots.pop_front() {
            Some(slot) => {
                self.last_op = format!("Dequeued \"{}\" from the queue", slot.value());
                Some(slot.elem.value)
            }
            None => {
                self.last_op = String::from("Cannot dequeue from an empty queue");
                None
            }
        }
    }

    /// Report the front value without removing it.
    pub fn front(&mut self) -> Option<&str> {
        match self.slots.front() {
            Some(slot) => {
                self.last_op = format!("Front element is \"{}\"", slot.value());
                Some(slot.value())
            }
            None => {
                self.last_op = String::from("The queue is empty");
                None
            }
        }
    }

    /// Report the rear value without removing it.
    pub fn rear(&mut self) -> Option<&str> {
        match self.slots.back() {
            Some(slot) => {
                self.last_op = format!("Rear element is \"{}\"", slot.value());
                Some(slot.value())
            }
            None => {
                self.last_op = String::from("The queue is empty");
                None
            }
        }
    }

    /// Remove everything and invalidate any pending flash clear.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.epoch += 1;
        self.flash.clear();
        self.last_op = String::from("Queue cleared");
    }

    /// Clear due flash flags. Called once per UI frame.
    pub fn poll_flash(&mut self, now: Instant) {
        clear_due_flash(self.slots.iter_mut(), &mut self.flash, self.epoch, now);
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}
