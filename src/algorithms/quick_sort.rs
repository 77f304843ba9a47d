//! Quick sort step function
//!
//! Recursion is replaced by an explicit worklist of pending `(low, high)`
//! ranges so the scheduler can pause between any two primitive operations.
//! Each tick performs one Lomuto partition step: the highlight phase marks
//! the probed element against the pivot, the commit phase swaps it into the
//! lower section or, once the scan reaches the pivot, places the pivot at its
//! final index, marks it [`Role::Sorted`] and pushes the two sub-ranges. The
//! run terminates when the worklist is empty and no partition is in progress.
//!
//! Every index is marked sorted exactly once: pivots at placement, singleton
//! ranges when popped.

use super::{Phase, StepAlgorithm, StepReport};
use crate::model::{clear_role, Element, Role};

/// Default sequence shown when the page opens.
pub const DEFAULT_SEQUENCE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// An in-progress Lomuto partition.
///
/// `boundary` is the next slot of the `<= pivot` prefix; `probe` walks
/// `low..high`. The pivot is the element currently at `high`.
struct Scan {
    low: usize,
    high: usize,
    boundary: usize,
    probe: usize,
}

/// Quick sort run state: the sequence plus a worklist of ranges pending
/// partition.
pub struct QuickSort {
    items: Vec<Element<i64>>,
    pending: Vec<(usize, usize)>,
    scan: Option<Scan>,
    sorted_count: usize,
    done: bool,
}

impl QuickSort {
    pub fn new(values: &[i64]) -> Self {
        let mut qs = QuickSort {
            items: values.iter().map(|&v| Element::new(v)).collect(),
            pending: Vec::new(),
            scan: None,
            sorted_count: 0,
            done: false,
        };
        qs.reset_worklist();
        qs
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ranges still awaiting partition, innermost last.
    pub fn pending_ranges(&self) -> &[(usize, usize)] {
        &self.pending
    }

    /// How many indices have been permanently placed so far.
    pub fn sorted_count(&self) -> usize {
        self.sorted_count
    }

    pub fn values(&self) -> Vec<i64> {
        self.items.iter().map(|e| e.value).collect()
    }

    /// Append a value. The caller resets the run before the next start.
    pub fn add_value(&mut self, value: i64) {
        self.items.push(Element::new(value));
        self.restart();
    }

    fn reset_worklist(&mut self) {
        self.pending.clear();
        if !self.items.is_empty() {
            self.pending.push((0, self.items.len() - 1));
        }
    }

    fn mark_sorted(&mut self, index: usize) {
        self.items[index].roles.add(Role::Sorted);
        self.sorted_count += 1;
    }

    /// Pop worklist entries until a partitionable range is found. Singleton
    /// ranges are already in place and are marked sorted on the way.
    fn next_scan(&mut self) -> bool {
        while let Some((low, high)) = self.pending.pop() {
            if low == high {
                self.mark_sorted(low);
                continue;
            }
            self.items[high].roles.add(Role::Pivot);
            self.scan = Some(Scan {
                low,
                high,
                boundary: low,
                probe: low,
            });
            return true;
        }
        false
    }

    fn step_highlight(&mut self) -> StepReport {
        if self.items.is_empty() {
            self.done = true;
            return StepReport::terminal("Nothing to sort: the sequence is empty.");
        }
        if self.scan.is_none() && !self.next_scan() {
            self.done = true;
            return StepReport::terminal(
                "Quick sort complete! All elements are in ascending order.",
            );
        }

        clear_role(&mut self.items, Role::Comparing);
        clear_role(&mut self.items, Role::Swapping);

        let Some(scan) = self.scan.as_ref() else {
            return StepReport::running("No partition in progress.");
        };
        let pivot = self.items[scan.high].value;
        if scan.probe < scan.high {
            let probed = self.items[scan.probe].value;
            self.items[scan.probe].roles.add(Role::Comparing);
            StepReport::running(format!(
                "Partitioning [{}, {}] with pivot {}: comparing {} at position {} with the pivot.",
                scan.low, scan.high, pivot, probed, scan.probe
            ))
        } else {
            self.items[scan.boundary].roles.add(Role::Comparing);
            self.items[scan.high].roles.add(Role::Comparing);
            StepReport::running(format!(
                "Scan of [{}, {}] complete. Placing pivot {} at position {}.",
                scan.low, scan.high, pivot, scan.boundary
            ))
        }
    }

    fn step_commit(&mut self) -> StepReport {
        let Some(scan) = self.scan.as_mut() else {
            return StepReport::running("No partition in progress; nothing to commit.");
        };
        let pivot = self.items[scan.high].value;

        if scan.probe < scan.high {
            let probed = self.items[scan.probe].value;
            let explanation = if probed <= pivot {
                self.items.swap(scan.boundary, scan.probe);
                clear_role(&mut self.items, Role::Comparing);
                self.items[scan.boundary].roles.add(Role::Swapping);
                self.items[scan.probe].roles.add(Role::Swapping);
                scan.boundary += 1;
                format!(
                    "{} \u{2264} pivot {}: moved into the lower section at position {}.",
                    probed,
                    pivot,
                    scan.boundary - 1
                )
            } else {
                format!("{} > pivot {}: no swap.", probed, pivot)
            };
            scan.probe += 1;
            return StepReport::running(explanation);
        }

        // Scan finished: place the pivot and split the range.
        let (low, high, dest) = (scan.low, scan.high, scan.boundary);
        self.items.swap(dest, high);
        clear_role(&mut self.items, Role::Comparing);
        clear_role(&mut self.items, Role::Swapping);
        clear_role(&mut self.items, Role::Pivot);
        self.mark_sorted(dest);
        // Push right first so the left sub-range is partitioned next.
        if dest < high {
            self.pending.push((dest + 1, high));
        }
        if dest > low {
            self.pending.push((low, dest - 1));
        }
        self.scan = None;
        StepReport::running(format!(
            "Pivot {} placed at its final position {}.",
            pivot, dest
        ))
    }
}

impl StepAlgorithm for QuickSort {
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
        self.scan = None;
        self.sorted_count = 0;
        self.done = false;
        self.reset_worklist();
    }

    fn elements(&self) -> &[Element<i64>] {
        &self.items
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
