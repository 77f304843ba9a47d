//! Timer-driven stepper for algorithm runs
//!
//! The scheduler owns the pacing of a run: it decides *when* the next phase
//! of a step fires, while the algorithm decides *what* the step does. Timing
//! is cooperative: the UI loop calls [`Scheduler::poll`] with the current
//! [`Instant`] and the scheduler fires at most one phase per call.
//!
//! A full tick is two phases spaced half the configured interval apart:
//! highlight (the "about to compare" roles appear) and commit (the mutation
//! lands). Speed changes apply when the next phase is armed, without losing
//! progress.
//!
//! The armed deadline is an owned [`TickHandle`] carrying the scheduler's
//! epoch. `reset()` bumps the epoch, so a handle that somehow survives a
//! reset can never fire into the replaced run state.

use std::time::{Duration, Instant};

use crate::algorithms::{Phase, StepAlgorithm, StepReport};

/// Slowest allowed interval between full ticks.
pub const SPEED_MAX: Duration = Duration::from_millis(2000);
/// Fastest allowed interval between full ticks.
pub const SPEED_MIN: Duration = Duration::from_millis(200);
/// Interval used until the user adjusts the speed.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No run in progress
    Idle,
    /// Timer armed, phases firing at cadence
    Running,
    /// Timer suspended, run state retained
    Paused,
    /// Step function signaled completion; final state stays visible
    Terminated,
}

/// An armed deadline for the next phase.
#[derive(Debug, Clone, Copy)]
struct TickHandle {
    due: Instant,
    epoch: u64,
}

/// Paces one algorithm run.
pub struct Scheduler {
    status: RunStatus,
    speed: Duration,
    next_phase: Phase,
    tick: Option<TickHandle>,
    epoch: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            status: RunStatus::Idle,
            speed: DEFAULT_SPEED,
            next_phase: Phase::Highlight,
            tick: None,
            epoch: 0,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Set the tick interval, clamped to the allowed range. Takes effect when
    /// the next phase is armed; an already-armed deadline is left alone.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Begin a run. No-op unless Idle.
    pub fn start(&mut self, now: Instant) {
        if self.status != RunStatus::Idle {
            return;
        }
        self.status = RunStatus::Running;
        self.next_phase = Phase::Highlight;
        self.arm(now);
    }

    /// Suspend the timer, dropping the armed deadline so no phase fires
    /// after the pause point. No-op unless Running.
    pub fn pause(&mut self) {
        if self.status == RunStatus::Running {
            self.status = RunStatus::Paused;
            self.tick = None;
        }
    }

    /// Re-arm the timer from a pause. No-op unless Paused; in particular,
    /// resuming a Terminated run does nothing.
    pub fn resume(&mut self, now: Instant) {
        if self.status == RunStatus::Paused {
            self.status = RunStatus::Running;
            self.arm(now + self.speed / 2);
        }
    }

    /// Return to Idle from any state. Bumps the epoch so any outstanding
    /// deadline is dead on arrival. The caller reinitializes the run state.
    pub fn reset(&mut self) {
        self.status = RunStatus::Idle;
        self.next_phase = Phase::Highlight;
        self.tick = None;
        self.epoch += 1;
    }

    /// Fire the next phase if it is due. At most one phase per call; a long
    /// gap between polls never produces a catch-up burst.
    pub fn poll(
        &mut self,
        now: Instant,
        algorithm: &mut dyn StepAlgorithm,
    ) -> Option<StepReport> {
        if self.status != RunStatus::Running {
            return None;
        }
        let handle = self.tick?;
        if handle.epoch != self.epoch {
            // Handle from before a reset; replace it instead of stalling on it.
            self.arm(now + self.speed / 2);
            return None;
        }
        if now < handle.due {
            return None;
        }
        let report = self.fire(algorithm);
        if self.status == RunStatus::Running {
            self.arm(now + self.speed / 2);
        }
        Some(report)
    }

    /// Execute exactly one phase right now, leaving the run Paused so the
    /// user can inspect the result. No-op when Terminated.
    pub fn step_once(&mut self, algorithm: &mut dyn StepAlgorithm) -> Option<StepReport> {
        match self.status {
            RunStatus::Terminated => None,
            RunStatus::Running | RunStatus::Paused | RunStatus::Idle => {
                let report = self.fire(algorithm);
                if self.status != RunStatus::Terminated {
                    self.status = RunStatus::Paused;
                    self.tick = None;
                }
                Some(report)
            }
        }
    }

    fn arm(&mut self, due: Instant) {
        self.tick = Some(TickHandle {
            due,
            epoch: self.epoch,
        });
    }

    fn fire(&mut self, algorithm: &mut dyn StepAlgorithm) -> StepReport {
        let report = algorithm.step(self.next_phase);
        self.next_phase = match self.next_phase {
            Phase::Highlight => Phase::Commit,
            Phase::Commit => Phase::Highlight,
        };
        if report.terminated {
            // Stop the timer exactly once and leave the final state visible.
            self.status = RunStatus::Terminated;
            self.tick = None;
        }
        report
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
