//! Step-wise algorithm engines
//!
//! Each algorithm is a run state plus a deterministic, non-blocking step
//! function. A full animation tick is split into two phases:
//!
//! - [`Phase::Highlight`] assigns "about to act" roles and explains what is
//!   being examined;
//! - [`Phase::Commit`] applies the resulting mutation (swap, bound move,
//!   pivot placement) and explains the outcome.
//!
//! The [`Scheduler`] drives the phases on a timer; nothing in here blocks or
//! schedules anything itself.
//!
//! [`Scheduler`]: crate::scheduler::Scheduler

pub mod binary_search;
pub mod bubble;
pub mod quick_sort;

pub use binary_search::BinarySearch;
pub use bubble::BubbleSort;
pub use quick_sort::QuickSort;

use crate::model::Element;

/// Which half of a tick is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Highlight,
    Commit,
}

/// Result of executing one phase of one step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Human-readable explanation of what just happened
    pub explanation: String,
    /// True once the algorithm has reached a terminal state
    pub terminated: bool,
}

impl StepReport {
    pub fn running(explanation: impl Into<String>) -> Self {
        StepReport {
            explanation: explanation.into(),
            terminated: false,
        }
    }

    pub fn terminal(explanation: impl Into<String>) -> Self {
        StepReport {
            explanation: explanation.into(),
            terminated: true,
        }
    }
}

/// A steppable algorithm run.
///
/// `step` must be deterministic given the current run state and must never
/// block; termination and edge-case policy live inside the implementation.
/// Malformed input (e.g. an empty sequence) terminates with a "not
/// applicable" explanation rather than returning an error.
pub trait StepAlgorithm {
    /// Execute one phase of one step.
    fn step(&mut self, phase: Phase) -> StepReport;

    /// Return the run state to its starting configuration, clearing all
    /// presentation roles. The element values themselves are kept.
    fn restart(&mut self);

    /// Current sequence with per-element roles, for rendering.
    fn elements(&self) -> &[Element<i64>];

    /// True once a terminal state was reached.
    fn is_done(&self) -> bool;
}
