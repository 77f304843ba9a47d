use std::time::{Duration, Instant};

use algotui::algorithms::{BubbleSort, Phase, StepAlgorithm, StepReport};
use algotui::model::{Element, Role};
use algotui::scheduler::{RunStatus, Scheduler, DEFAULT_SPEED, SPEED_MAX, SPEED_MIN};

/// Test double that records the phases it was driven through and terminates
/// after a fixed number of phases.
struct Probe {
    phases: Vec<Phase>,
    terminate_after: usize,
    elements: Vec<Element<i64>>,
}

impl Probe {
    fn new(terminate_after: usize) -> Self {
        Probe {
            phases: Vec::new(),
            terminate_after,
            elements: Vec::new(),
        }
    }
}

impl StepAlgorithm for Probe {
    fn step(&mut self, phase: Phase) -> StepReport {
        self.phases.push(phase);
        if self.phases.len() >= self.terminate_after {
            StepReport::terminal("done")
        } else {
            StepReport::running("step")
        }
    }

    fn restart(&mut self) {
        self.phases.clear();
    }

    fn elements(&self) -> &[Element<i64>] {
        &self.elements
    }

    fn is_done(&self) -> bool {
        self.phases.len() >= self.terminate_after
    }
}

#[test]
fn phases_alternate_at_half_speed_cadence() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();
    let half = DEFAULT_SPEED / 2;

    sched.start(t0);
    assert_eq!(sched.status(), RunStatus::Running);

    // Start arms the first phase immediately.
    assert!(sched.poll(t0, &mut probe).is_some());
    // The next phase is not due until half an interval later.
    assert!(sched.poll(t0 + half - Duration::from_millis(1), &mut probe).is_none());
    assert!(sched.poll(t0 + half, &mut probe).is_some());
    assert!(sched.poll(t0 + 2 * half, &mut probe).is_some());
    assert!(sched.poll(t0 + 3 * half, &mut probe).is_some());

    assert_eq!(
        probe.phases,
        vec![Phase::Highlight, Phase::Commit, Phase::Highlight, Phase::Commit]
    );
}

#[test]
fn poll_fires_at_most_one_phase_per_call() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();
    sched.start(t0);

    // A long gap between polls must not produce a catch-up burst.
    let late = t0 + 10 * DEFAULT_SPEED;
    assert!(sched.poll(late, &mut probe).is_some());
    assert_eq!(probe.phases.len(), 1);
    assert!(sched.poll(late, &mut probe).is_none());
}

#[test]
fn pause_blocks_a_due_phase_and_resume_continues_phase_order() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();
    let half = DEFAULT_SPEED / 2;

    sched.start(t0);
    sched.poll(t0, &mut probe); // Highlight fires

    sched.pause();
    assert_eq!(sched.status(), RunStatus::Paused);
    // The phase that was armed before the pause never fires.
    assert!(sched.poll(t0 + 10 * DEFAULT_SPEED, &mut probe).is_none());
    assert_eq!(probe.phases.len(), 1);

    let t1 = t0 + 5 * DEFAULT_SPEED;
    sched.resume(t1);
    assert_eq!(sched.status(), RunStatus::Running);
    // Re-armed relative to the resume instant, not the pause instant.
    assert!(sched.poll(t1, &mut probe).is_none());
    assert!(sched.poll(t1 + half, &mut probe).is_some());
    // Phase order picks up where it left off.
    assert_eq!(probe.phases, vec![Phase::Highlight, Phase::Commit]);
}

#[test]
fn terminal_report_stops_the_timer_exactly_once() {
    let t0 = Instant::now();
    let mut probe = Probe::new(3);
    let mut sched = Scheduler::new();
    let half = DEFAULT_SPEED / 2;

    sched.start(t0);
    sched.poll(t0, &mut probe);
    sched.poll(t0 + half, &mut probe);
    let report = sched.poll(t0 + 2 * half, &mut probe).unwrap();
    assert!(report.terminated);
    assert_eq!(sched.status(), RunStatus::Terminated);

    // No further phases fire, however long we keep polling.
    for i in 3..10 {
        assert!(sched.poll(t0 + i * half, &mut probe).is_none());
    }
    assert_eq!(probe.phases.len(), 3);

    // Pause and resume are no-ops on a terminated run.
    sched.pause();
    assert_eq!(sched.status(), RunStatus::Terminated);
    sched.resume(t0 + 10 * half);
    assert_eq!(sched.status(), RunStatus::Terminated);
    assert!(sched.poll(t0 + 20 * half, &mut probe).is_none());
}

#[test]
fn start_while_running_is_a_noop() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();

    sched.start(t0);
    sched.poll(t0, &mut probe);

    // A second start must not re-arm or reset the phase order.
    sched.start(t0 + DEFAULT_SPEED);
    assert!(sched.poll(t0 + DEFAULT_SPEED / 4, &mut probe).is_none());
    sched.poll(t0 + DEFAULT_SPEED / 2, &mut probe);
    assert_eq!(probe.phases, vec![Phase::Highlight, Phase::Commit]);
}

#[test]
fn reset_returns_to_idle_and_kills_outstanding_deadlines() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();

    sched.start(t0);
    sched.poll(t0, &mut probe);
    let epoch_before = sched.epoch();

    sched.reset();
    assert_eq!(sched.status(), RunStatus::Idle);
    assert!(sched.epoch() > epoch_before);
    assert!(sched.poll(t0 + 10 * DEFAULT_SPEED, &mut probe).is_none());
    assert_eq!(probe.phases.len(), 1);

    // A fresh start begins a new tick from the highlight phase.
    sched.start(t0 + DEFAULT_SPEED);
    sched.poll(t0 + DEFAULT_SPEED, &mut probe);
    assert_eq!(probe.phases.last(), Some(&Phase::Highlight));
}

#[test]
fn run_restarted_after_reset_never_stalls() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();
    let half = DEFAULT_SPEED / 2;

    sched.start(t0);
    sched.poll(t0, &mut probe);
    sched.reset();

    // Phases keep firing at cadence under the post-reset epoch.
    let base = t0 + DEFAULT_SPEED;
    sched.start(base);
    for i in 0..6 {
        assert!(sched.poll(base + i * half, &mut probe).is_some());
    }
    assert_eq!(probe.phases.len(), 7);
}

#[test]
fn reset_is_valid_from_every_state() {
    let t0 = Instant::now();
    let mut probe = Probe::new(1);
    let mut sched = Scheduler::new();

    sched.reset(); // Idle
    assert_eq!(sched.status(), RunStatus::Idle);

    sched.start(t0); // Running
    sched.reset();
    assert_eq!(sched.status(), RunStatus::Idle);

    sched.start(t0);
    sched.pause(); // Paused
    sched.reset();
    assert_eq!(sched.status(), RunStatus::Idle);

    sched.start(t0);
    sched.poll(t0, &mut probe); // Terminated
    assert_eq!(sched.status(), RunStatus::Terminated);
    sched.reset();
    assert_eq!(sched.status(), RunStatus::Idle);
}

#[test]
fn speed_is_clamped_and_applies_to_the_next_armed_phase() {
    let t0 = Instant::now();
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();

    sched.set_speed(Duration::from_millis(50));
    assert_eq!(sched.speed(), SPEED_MIN);
    sched.set_speed(Duration::from_secs(60));
    assert_eq!(sched.speed(), SPEED_MAX);

    sched.set_speed(Duration::from_millis(400));
    sched.start(t0);
    sched.poll(t0, &mut probe);
    // Next phase due 200ms later under the new speed.
    assert!(sched.poll(t0 + Duration::from_millis(199), &mut probe).is_none());
    assert!(sched.poll(t0 + Duration::from_millis(200), &mut probe).is_some());
}

#[test]
fn step_once_fires_one_phase_and_leaves_the_run_paused() {
    let mut probe = Probe::new(100);
    let mut sched = Scheduler::new();

    let report = sched.step_once(&mut probe).unwrap();
    assert!(!report.terminated);
    assert_eq!(sched.status(), RunStatus::Paused);
    assert_eq!(probe.phases, vec![Phase::Highlight]);

    sched.step_once(&mut probe);
    assert_eq!(probe.phases, vec![Phase::Highlight, Phase::Commit]);
    assert_eq!(sched.status(), RunStatus::Paused);

    // A due timer never sneaks a phase in while single-stepping.
    assert!(sched
        .poll(Instant::now() + 10 * DEFAULT_SPEED, &mut probe)
        .is_none());
}

#[test]
fn step_once_after_termination_is_a_noop() {
    let mut probe = Probe::new(1);
    let mut sched = Scheduler::new();

    let report = sched.step_once(&mut probe).unwrap();
    assert!(report.terminated);
    assert_eq!(sched.status(), RunStatus::Terminated);
    assert!(sched.step_once(&mut probe).is_none());
    assert_eq!(probe.phases.len(), 1);
}

#[test]
fn pause_reset_restart_round_trip_clears_run_state() {
    // Drive a real algorithm: pause mid-run, reset, and verify the restarted
    // run begins from a clean first pass.
    let t0 = Instant::now();
    let mut sort = BubbleSort::new(&[5, 3, 1]);
    let mut sched = Scheduler::new();
    let half = DEFAULT_SPEED / 2;

    sched.start(t0);
    for i in 0..4 {
        sched.poll(t0 + i * half, &mut sort);
    }
    sched.pause();
    assert!(sort.elements().iter().any(|e| !e.roles.is_empty()) || sort.pass() > 0);

    sched.reset();
    sort.restart();
    assert_eq!(sched.status(), RunStatus::Idle);
    assert_eq!(sort.pass(), 0);
    assert!(sort.elements().iter().all(|e| e.roles.is_empty()));
    assert!(!sort.elements().iter().any(|e| e.roles.has(Role::Sorted)));

    // And the run is startable again from the top.
    let t1 = t0 + Duration::from_secs(30);
    sched.start(t1);
    let report = sched.poll(t1, &mut sort).unwrap();
    assert!(!report.terminated);
    assert!(sort
        .elements()
        .iter()
        .any(|e| e.roles.has(Role::Comparing)));
}
