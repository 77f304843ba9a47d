//! Direct-manipulation container structures
//!
//! Stack, queue and linked list are ordinary O(1)/O(position) structures with
//! a presentation layer on top: every successful mutation records a
//! human-readable description of the action and marks the affected slot with
//! [`Role::Flash`], cleared after a fixed short delay. Operations on an empty
//! structure are reported through the description, never raised as errors.
//!
//! Flash clearing is a set of deadlines polled by the UI loop, one armed
//! [`FlashTimer`] per mutated slot so back-to-back mutations each clear on
//! their own schedule. Timers carry the container's epoch; `clear()` bumps
//! the epoch so a stale deadline can never touch slots that replaced the
//! ones it was armed for. Ordering invariants (LIFO, FIFO, index shifting)
//! hold independent of the flags.

pub mod list;
pub mod queue;
pub mod stack;

pub use list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;

use std::time::{Duration, Instant};

use crate::model::{Element, Role};

/// How long a freshly mutated slot stays highlighted.
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Identity of a container slot. Monotonically increasing and never reused
/// after deletion, so animations can target the same node across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// One container slot: an identified string-valued element.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: NodeId,
    pub elem: Element<String>,
}

impl Slot {
    fn new(id: NodeId, value: String) -> Self {
        let mut elem = Element::new(value);
        elem.roles.add(Role::Flash);
        Slot { id, elem }
    }

    pub fn value(&self) -> &str {
        &self.elem.value
    }

    pub fn is_flashing(&self) -> bool {
        self.elem.roles.has(Role::Flash)
    }
}

/// Deadline for clearing one slot's flash flag.
#[derive(Debug, Clone, Copy)]
pub struct FlashTimer {
    due: Instant,
    id: NodeId,
    epoch: u64,
}

impl FlashTimer {
    fn arm(id: NodeId, epoch: u64, now: Instant) -> Self {
        FlashTimer {
            due: now + FLASH_DURATION,
            id,
            epoch,
        }
    }
}

/// Clear the flash flag of every slot whose deadline has passed. Timers from
/// an older epoch are dropped without touching anything.
fn clear_due_flash<'a>(
    slots: impl Iterator<Item = &'a mut Slot>,
    timers: &mut Vec<FlashTimer>,
    epoch: u64,
    now: Instant,
) {
    timers.retain(|timer| timer.epoch == epoch);
    if timers.iter().all(|timer| now < timer.due) {
        return;
    }
    for slot in slots {
        if timers
            .iter()
            .any(|timer| now >= timer.due && timer.id == slot.id)
        {
            slot.elem.roles.remove(Role::Flash);
        }
    }
    timers.retain(|timer| now < timer.due);
}
