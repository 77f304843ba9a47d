//! Binary search step function
//!
//! The sequence is assumed sorted ascending; that is the caller's invariant
//! and is not enforced here. Each tick consumes exactly one comparison: the
//! highlight phase computes the midpoint and marks the active range
//! ([`Role::LeftBound`], [`Role::RightBound`], [`Role::Mid`]), the commit
//! phase resolves the comparison by halving the range or terminating with
//! [`Role::Found`]. A highlight that sees `low > high` terminates as
//! not-found and reports the iteration count.
//!
//! The iteration counter bumps when a range is examined and once more on the
//! commit that resolves the search, so a target found at the first midpoint
//! reports two iterations.

use super::{Phase, StepAlgorithm, StepReport};
use crate::model::{clear_role, Element, Role};

/// Default sorted sequence shown when the page opens.
pub const DEFAULT_SEQUENCE: [i64; 11] = [2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78];

/// Default search target.
pub const DEFAULT_TARGET: i64 = 23;

/// Binary search run state. Invariant: `low <= high + 1`.
pub struct BinarySearch {
    items: Vec<Element<i64>>,
    target: i64,
    low: i64,
    high: i64,
    mid: Option<i64>,
    found: bool,
    iterations: u32,
    done: bool,
}

impl BinarySearch {
    /// `values` must already be sorted ascending.
    pub fn new(values: &[i64], target: i64) -> Self {
        BinarySearch {
            items: values.iter().map(|&v| Element::new(v)).collect(),
            target,
            low: 0,
            high: values.len() as i64 - 1,
            mid: None,
            found: false,
            iterations: 0,
            done: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Change the target. Only meaningful before a run; the caller enforces
    /// that the scheduler is not mid-run.
    pub fn set_target(&mut self, target: i64) {
        self.target = target;
        self.restart();
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn found_index(&self) -> Option<usize> {
        if self.found {
            self.mid.map(|m| m as usize)
        } else {
            None
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a value at its sorted position, keeping the precondition intact.
    pub fn add_value(&mut self, value: i64) {
        let pos = self
            .items
            .iter()
            .position(|e| e.value > value)
            .unwrap_or(self.items.len());
        self.items.insert(pos, Element::new(value));
        self.restart();
    }

    /// Drop the last element, keeping at least three.
    pub fn remove_last(&mut self) -> bool {
        if self.items.len() <= 3 {
            return false;
        }
        self.items.pop();
        self.restart();
        true
    }

    fn step_highlight(&mut self) -> StepReport {
        if self.items.is_empty() {
            self.done = true;
            return StepReport::terminal("Nothing to search: the sequence is empty.");
        }
        if self.low > self.high {
            self.done = true;
            clear_role(&mut self.items, Role::LeftBound);
            clear_role(&mut self.items, Role::RightBound);
            clear_role(&mut self.items, Role::Mid);
            return StepReport::terminal(format!(
                "Search complete. Target {} was not found after {} iterations.",
                self.target, self.iterations
            ));
        }

        let mid = (self.low + self.high) / 2;
        self.mid = Some(mid);
        self.iterations += 1;

        for (idx, elem) in self.items.iter_mut().enumerate() {
            let idx = idx as i64;
            elem.roles.remove(Role::LeftBound);
            elem.roles.remove(Role::RightBound);
            elem.roles.remove(Role::Mid);
            if idx == self.low {
                elem.roles.add(Role::LeftBound);
            }
            if idx == self.high {
                elem.roles.add(Role::RightBound);
            }
            if idx == mid {
                elem.roles.add(Role::Mid);
            }
            if idx < self.low || idx > self.high {
                elem.roles.add(Role::Eliminated);
            }
        }

        let probed = self.items[mid as usize].value;
        StepReport::running(format!(
            "Iteration {}: searching range [{}, {}]. Mid = {}, sequence[{}] = {}. Comparing {} with target {}.",
            self.iterations, self.low, self.high, mid, mid, probed, probed, self.target
        ))
    }

    fn step_commit(&mut self) -> StepReport {
        let Some(mid) = self.mid else {
            return StepReport::running("No midpoint probed yet; nothing to resolve.");
        };
        let probed = self.items[mid as usize].value;

        if probed == self.target {
            self.iterations += 1;
            self.found = true;
            self.done = true;
            clear_role(&mut self.items, Role::LeftBound);
            clear_role(&mut self.items, Role::RightBound);
            clear_role(&mut self.items, Role::Mid);
            self.items[mid as usize].roles.add(Role::Found);
            return StepReport::terminal(format!(
                "Found! Target {} is at index {} after {} iterations.",
                self.target, mid, self.iterations
            ));
        }

        if probed < self.target {
            self.low = mid + 1;
            StepReport::running(format!(
                "{} < {}, so the target must be in the right half. New range: [{}, {}].",
                probed, self.target, self.low, self.high
            ))
        } else {
            self.high = mid - 1;
            StepReport::running(format!(
                "{} > {}, so the target must be in the left half. New range: [{}, {}].",
                probed, self.target, self.low, self.high
            ))
        }
    }
}

impl StepAlgorithm for BinarySearch {
    fn step(&mut self, phase: Phase) -> StepReport {
        if self.done {
            return StepReport::terminal("Search already complete.");
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
        self.low = 0;
        self.high = self.items.len() as i64 - 1;
        self.mid = None;
        self.found = false;
        self.iterations = 0;
        self.done = false;
    }

    fn elements(&self) -> &[Element<i64>] {
        &self.items
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
