//! # Introduction
//!
//! algotui animates classic algorithms and data structures in the terminal,
//! one discrete, observable step at a time, with a plain-language explanation
//! of every step and user-adjustable pacing.
//!
//! ## Animation pipeline
//!
//! ```text
//! User input → Scheduler → Step Function → Elements + Roles → Presentation → TUI
//! ```
//!
//! 1. [`model`] — elements: a value plus a set of presentation-only roles.
//! 2. [`algorithms`] — step functions for bubble sort, quick sort and binary
//!    search, each advancing its run state by one two-phase step.
//! 3. [`scheduler`] — the timer: play/pause/resume/reset, speed control, and
//!    the epoch guard that keeps stale deadlines away from replaced state.
//! 4. [`containers`] — stack, queue and linked list with described O(1)
//!    operations and transient mutation flashes.
//! 5. [`presentation`] — the pure role-to-color/label lookup.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod containers;
pub mod model;
pub mod presentation;
pub mod scheduler;
pub mod ui;
