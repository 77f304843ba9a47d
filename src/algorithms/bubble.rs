//! Bubble sort step function
//!
//! One tick compares one adjacent pair. The highlight phase marks the pair
//! [`Role::Comparing`]; the commit phase swaps if the pair is out of order
//! (equal elements never swap, keeping the sort stable) and advances the
//! cursor. When the cursor reaches the unsorted boundary, one more trailing
//! element is marked [`Role::Sorted`] and the next pass begins. The run
//! terminates once `pass >= len - 1`.

use super::{Phase, StepAlgorithm, StepReport};
use crate::model::{clear_role, Element, Role};

/// Default sequence shown when the page opens.
pub const DEFAULT_SEQUENCE: [i64; 6] = [64, 34, 25, 12, 22, 11];

/// Bubble sort run state.
///
/// Invariant: `0 <= cursor < len - 1 - pass` while running; elements at
/// `len - 1 - pass ..` carry [`Role::Sorted`] and are never revisited.
pub struct BubbleSort {
    items: Vec<Element<i64>>,
    pass: usize,
    cursor: usize,
    done: bool,
}

impl BubbleSort {
    pub fn new(values: &[i64]) -> Self {
        BubbleSort {
            items: values.iter().map(|&v| Element::new(v)).collect(),
            pass: 0,
            cursor: 0,
            done: false,
        }
    }

    pub fn pass(&self) -> usize {
        self.pass
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value to the unsorted sequence. The caller resets the run
    /// before the next start.
    pub fn add_value(&mut self, value: i64) {
        self.items.push(Element::new(value));
        self.restart();
    }

    /// Drop the last element, keeping at least one.
    pub fn remove_last(&mut self) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        self.items.pop();
        self.restart();
        true
    }

    pub fn values(&self) -> Vec<i64> {
        self.items.iter().map(|e| e.value).collect()
    }

    fn finish(&mut self) -> StepReport {
        for elem in &mut self.items {
            elem.roles.clear();
            elem.roles.add(Role::Sorted);
        }
        self.done = true;
        StepReport::terminal("Sorting complete! All elements are now in ascending order.")
    }

    fn step_highlight(&mut self) -> StepReport {
        let n = self.items.len();
        if n < 2 {
            self.done = true;
            for elem in &mut self.items {
                elem.roles.add(Role::Sorted);
            }
            return StepReport::terminal("Nothing to sort: the sequence has fewer than two elements.");
        }
        if self.pass >= n - 1 {
            return self.finish();
        }

        clear_role(&mut self.items, Role::Comparing);
        clear_role(&mut self.items, Role::Swapping);

        let i = self.cursor;
        let j = i + 1;
        self.items[i].roles.add(Role::Comparing);
        self.items[j].roles.add(Role::Comparing);
        StepReport::running(format!(
            "Comparing elements at positions {} and {}: {} and {}.",
            i, j, self.items[i].value, self.items[j].value
        ))
    }

    fn step_commit(&mut self) -> StepReport {
        let n = self.items.len();
        let i = self.cursor;
        let j = i + 1;
        let (a, b) = (self.items[i].value, self.items[j].value);

        // Strictly greater: equal adjacent elements never swap.
        let mut explanation = if a > b {
            self.items.swap(i, j);
            clear_role(&mut self.items, Role::Comparing);
            self.items[i].roles.add(Role::Swapping);
            self.items[j].roles.add(Role::Swapping);
            format!("Swapping {} and {} because {} > {}.", a, b, a, b)
        } else {
            format!("No swap needed: {} \u{2264} {}.", a, b)
        };

        self.cursor += 1;
        if self.cursor >= n - 1 - self.pass {
            let settled = n - 1 - self.pass;
            self.items[settled].roles.add(Role::Sorted);
            self.pass += 1;
            self.cursor = 0;
            explanation.push_str(&format!(
                " Pass {} complete: position {} is now final.",
                self.pass, settled
            ));
            if self.pass >= n - 1 {
                let report = self.finish();
                explanation.push(' ');
                explanation.push_str(&report.explanation);
                return StepReport::terminal(explanation);
            }
        }
        StepReport::running(explanation)
    }
}

impl StepAlgorithm for BubbleSort {
    fn step(&mut self, phase: Phase) -> StepReport {
        if self.done {
            return StepReport::terminal("Sorting already complete.");
        }
        match phase {
            Phase::Highlight => self.step_highlight(),
            Phase::Commit => self.step_commit(),
        }
    }

    fn restart(&mut self) {
        for elem in &mut self.items {
            elem.roles.clear();
        }
        self.pass = 0;
        self.cursor = 0;
        self.done = false;
    }

    fn elements(&self) -> &[Element<i64>] {
        &self.items
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
