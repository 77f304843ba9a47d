use std::time::{Duration, Instant};

use algotui::containers::{LinkedList, Queue, Stack, FLASH_DURATION};

#[test]
fn stack_is_lifo() {
    let now = Instant::now();
    let mut stack = Stack::new();
    stack.push("first", now);
    stack.push("second", now);
    stack.push("third", now);

    assert_eq!(stack.pop().as_deref(), Some("third"));
    stack.push("fourth", now);
    assert_eq!(stack.pop().as_deref(), Some("fourth"));
    assert_eq!(stack.pop().as_deref(), Some("second"));
    assert_eq!(stack.pop().as_deref(), Some("first"));
    assert!(stack.is_empty());
}

#[test]
fn stack_pop_on_empty_is_reported_not_raised() {
    let mut stack = Stack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.last_op(), "Cannot pop from an empty stack");

    assert_eq!(stack.peek(), None);
    assert_eq!(stack.last_op(), "The stack is empty");
}

#[test]
fn stack_peek_does_not_remove() {
    let now = Instant::now();
    let mut stack = Stack::new();
    stack.push("only", now);
    assert_eq!(stack.peek(), Some("only"));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.last_op(), "Top element is \"only\"");
}

#[test]
fn queue_is_fifo() {
    let now = Instant::now();
    let mut queue = Queue::new();
    queue.enqueue("a", now);
    queue.enqueue("b", now);
    queue.enqueue("c", now);

    assert_eq!(queue.dequeue().as_deref(), Some("a"));
    queue.enqueue("d", now);
    assert_eq!(queue.dequeue().as_deref(), Some("b"));
    assert_eq!(queue.dequeue().as_deref(), Some("c"));
    assert_eq!(queue.dequeue().as_deref(), Some("d"));
    assert!(queue.is_empty());
}

#[test]
fn queue_front_rear_and_empty_reports() {
    let now = Instant::now();
    let mut queue = Queue::new();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.last_op(), "Cannot dequeue from an empty queue");

    queue.enqueue("x", now);
    queue.enqueue("y", now);
    assert_eq!(queue.front(), Some("x"));
    assert_eq!(queue.rear(), Some("y"));
    assert_eq!(queue.len(), 2);
}

#[test]
fn list_insert_then_read_returns_value() {
    let now = Instant::now();
    let mut list = LinkedList::new();
    list.append("a", now);
    list.append("c", now);
    assert!(list.insert_at(1, "b", now));
    assert_eq!(list.get(1), Some("b"));
    assert_eq!(list.get(0), Some("a"));
    assert_eq!(list.get(2), Some("c"));
}

#[test]
fn list_delete_shifts_subsequent_indices() {
    let now = Instant::now();
    let mut list = LinkedList::new();
    for v in ["a", "b", "c", "d"] {
        list.append(v, now);
    }
    assert_eq!(list.delete_at(1).as_deref(), Some("b"));
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some("c"));
    assert_eq!(list.get(2), Some("d"));
}

#[test]
fn list_insert_at_len_is_append_and_zero_is_prepend() {
    let now = Instant::now();
    let mut list = LinkedList::new();
    list.append("middle", now);

    assert!(list.insert_at(list.len(), "tail", now));
    assert_eq!(list.get(list.len() - 1), Some("tail"));

    assert!(list.insert_at(0, "head", now));
    assert_eq!(list.get(0), Some("head"));
    assert_eq!(list.get(1), Some("middle"));
}

#[test]
fn list_out_of_bounds_operations_are_reported_noops() {
    let now = Instant::now();
    let mut list = LinkedList::new();
    list.append("only", now);

    assert!(!list.insert_at(5, "nope", now));
    assert_eq!(list.len(), 1);
    assert!(list.last_op().contains("Invalid position 5"));

    assert_eq!(list.delete_at(3), None);
    assert_eq!(list.len(), 1);
    assert!(list.last_op().contains("Invalid position 3"));
}

#[test]
fn list_node_ids_are_never_reused() {
    let now = Instant::now();
    let mut list = LinkedList::new();
    list.append("a", now);
    list.append("b", now);
    let first_ids: Vec<_> = list.slots().iter().map(|s| s.id).collect();

    list.delete_at(0);
    list.append("c", now);
    list.clear();
    list.append("d", now);

    for slot in list.slots() {
        assert!(
            !first_ids.contains(&slot.id),
            "id {:?} was reused",
            slot.id
        );
    }
}

#[test]
fn flash_flag_clears_after_fixed_delay() {
    let now = Instant::now();
    let mut stack = Stack::new();
    stack.push("fresh", now);
    assert!(stack.top().unwrap().is_flashing());

    // Not yet due.
    stack.poll_flash(now);
    assert!(stack.top().unwrap().is_flashing());

    stack.poll_flash(now + FLASH_DURATION);
    assert!(!stack.top().unwrap().is_flashing());
}

#[test]
fn overlapping_flashes_each_clear_on_their_own_deadline() {
    let t0 = Instant::now();
    let t1 = t0 + Duration::from_millis(100);
    let mut stack = Stack::new();
    stack.push("first", t0);
    stack.push("second", t1);

    // First deadline passes while the second flash is still in its window.
    stack.poll_flash(t0 + FLASH_DURATION);
    assert!(!stack.slots()[0].is_flashing());
    assert!(stack.slots()[1].is_flashing());

    stack.poll_flash(t1 + FLASH_DURATION);
    assert!(!stack.slots()[1].is_flashing());
}

#[test]
fn rapid_list_inserts_all_stop_flashing() {
    let t0 = Instant::now();
    let mut list = LinkedList::new();
    for (i, v) in ["a", "b", "c"].into_iter().enumerate() {
        list.append(v, t0 + Duration::from_millis(50 * i as u64));
    }

    list.poll_flash(t0 + Duration::from_millis(100) + FLASH_DURATION);
    assert!(list.slots().iter().all(|s| !s.is_flashing()));
}

#[test]
fn flash_survives_only_for_latest_mutation_epoch() {
    let now = Instant::now();
    let mut queue = Queue::new();
    queue.enqueue("old", now);
    queue.clear();
    queue.enqueue("new", now);

    // The pre-clear deadline must not strip the new slot's flash early:
    // polling at the old due time only affects timers from the live epoch.
    queue.poll_flash(now);
    assert!(queue.iter().next().unwrap().is_flashing());

    queue.poll_flash(now + FLASH_DURATION);
    assert!(!queue.iter().next().unwrap().is_flashing());
}

#[test]
fn ordering_holds_independent_of_flash_flags() {
    let now = Instant::now();
    let mut queue = Queue::new();
    queue.enqueue("a", now);
    queue.poll_flash(now + FLASH_DURATION);
    queue.enqueue("b", now);

    // One slot flashed, one not; FIFO order is unaffected.
    assert_eq!(queue.dequeue().as_deref(), Some("a"));
    assert_eq!(queue.dequeue().as_deref(), Some("b"));
}
