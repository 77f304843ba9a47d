//! LIFO stack with push/pop/peek animation hooks

use std::time::Instant;

use super::{clear_due_flash, FlashTimer, NodeId, Slot};

/// A stack of string values. Insertion and removal happen at the same end
/// (the top, the back of the vector).
pub struct Stack {
    slots: Vec<Slot>,
    next_id: u64,
    epoch: u64,
    flash: Vec<FlashTimer>,
    last_op: String,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            slots: Vec::new(),
            next_id: 1,
            epoch: 0,
            flash: Vec::new(),
            last_op: String::new(),
        }
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

    pub fn top(&self) -> Option<&Slot> {
        self.slots.last()
    }

    /// Description of the most recent operation, including reported failures.
    pub fn last_op(&self) -> &str {
        &self.last_op
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: &str, now: Instant) {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot::new(id, value.to_string()));
        self.flash.push(FlashTimer::arm(id, self.epoch, now));
        self.last_op = format!("Pushed \"{}\" onto the stack", value);
    }

    /// Pop the top value. Popping an empty stack is a reported no-op.
    pub fn pop(&mut self) -> Option<String> {
        match self.slots.pop() {
            Some(slot) => {
                self.last_op = format!("Popped \"{}\" from the stack", slot.value());
                Some(slot.elem.value)
            }
            None => {
                self.last_op = String::from("Cannot pop from an empty stack");
                None
            }
        }
    }

    /// Report the top value without removing it.
    pub fn peek(&mut self) -> Option<&str> {
        match self.slots.last() {
            Some(slot) => {
                self.last_op = format!("Top element is \"{}\"", slot.value());
                Some(slot.value())
            }
            None => {
                self.last_op = String::from("The stack is empty");
                None
            }
        }
    }

    /// Remove everything and invalidate any pending flash clear.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.epoch += 1;
        self.flash.clear();
        self.last_op = String::from("Stack cleared");
    }

    /// Clear due flash flags. Called once per UI frame.
    pub fn poll_flash(&mut self, now: Instant) {
        clear_due_flash(self.slots.iter_mut(), &mut self.flash, self.epoch, now);
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
