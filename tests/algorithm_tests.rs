use algotui::algorithms::{
    binary_search, bubble, quick_sort, BinarySearch, BubbleSort, Phase, QuickSort, StepAlgorithm,
};
use algotui::model::Role;

/// Drive an algorithm phase-by-phase to termination, the way the scheduler
/// does, collecting every explanation along the way.
fn run_to_completion(alg: &mut dyn StepAlgorithm) -> Vec<String> {
    let mut explanations = Vec::new();
    for _ in 0..10_000 {
        let report = alg.step(Phase::Highlight);
        explanations.push(report.explanation.clone());
        if report.terminated {
            return explanations;
        }
        let report = alg.step(Phase::Commit);
        explanations.push(report.explanation.clone());
        if report.terminated {
            return explanations;
        }
    }
    panic!("algorithm did not terminate within 10k steps");
}

fn values(alg: &dyn StepAlgorithm) -> Vec<i64> {
    alg.elements().iter().map(|e| e.value).collect()
}

fn is_non_decreasing(v: &[i64]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

fn same_multiset(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[test]
fn bubble_sorts_various_inputs() {
    let inputs: [&[i64]; 5] = [
        &[64, 34, 25, 12, 22, 11],
        &[90, 80, 70, 60, 50],
        &[1, 2, 3, 4, 5],
        &[5, 1, 5, 1, 5],
        &[42, 7],
    ];
    for input in inputs {
        let mut sort = BubbleSort::new(input);
        run_to_completion(&mut sort);
        let result = values(&sort);
        assert!(is_non_decreasing(&result), "not sorted: {:?}", result);
        assert!(same_multiset(input, &result), "not a permutation of {:?}", input);
        assert!(sort
            .elements()
            .iter()
            .all(|e| e.roles.has(Role::Sorted)));
    }
}

#[test]
fn bubble_default_scenario_takes_five_passes() {
    let mut sort = BubbleSort::new(&bubble::DEFAULT_SEQUENCE);
    run_to_completion(&mut sort);
    assert_eq!(values(&sort), vec![11, 12, 22, 25, 34, 64]);
    assert_eq!(sort.pass(), 5);
    assert!(sort.is_done());
}

#[test]
fn bubble_equal_elements_never_swap() {
    let mut sort = BubbleSort::new(&[7, 7, 7, 7]);
    let explanations = run_to_completion(&mut sort);
    assert!(
        explanations.iter().all(|e| !e.contains("Swapping")),
        "stable sort must not swap equal elements"
    );
}

#[test]
fn bubble_degenerate_inputs_terminate_gracefully() {
    let mut empty = BubbleSort::new(&[]);
    let explanations = run_to_completion(&mut empty);
    assert!(explanations.last().unwrap().contains("Nothing to sort"));

    let mut single = BubbleSort::new(&[9]);
    run_to_completion(&mut single);
    assert!(single.elements()[0].roles.has(Role::Sorted));
}

#[test]
fn quick_sorts_various_inputs() {
    let inputs: [&[i64]; 5] = [
        &[64, 34, 25, 12, 22, 11, 90],
        &[3, 3, 3, 1, 1, 2],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        &[1],
        &[2, 1],
    ];
    for input in inputs {
        let mut sort = QuickSort::new(input);
        run_to_completion(&mut sort);
        let result = values(&sort);
        assert!(is_non_decreasing(&result), "not sorted: {:?}", result);
        assert!(same_multiset(input, &result), "not a permutation of {:?}", input);
        // Every index placed exactly once.
        assert_eq!(sort.sorted_count(), input.len());
        assert!(sort.elements().iter().all(|e| e.roles.has(Role::Sorted)));
    }
}

#[test]
fn quick_default_scenario() {
    let mut sort = QuickSort::new(&quick_sort::DEFAULT_SEQUENCE);
    run_to_completion(&mut sort);
    assert_eq!(values(&sort), vec![11, 12, 22, 25, 34, 64, 90]);
    assert!(sort.pending_ranges().is_empty());
    assert!(sort.is_done());
}

#[test]
fn quick_empty_sequence_terminates_gracefully() {
    let mut sort = QuickSort::new(&[]);
    let explanations = run_to_completion(&mut sort);
    assert!(explanations.last().unwrap().contains("Nothing to sort"));
}

#[test]
fn search_default_scenario_finds_target_at_first_midpoint() {
    let mut search = BinarySearch::new(&binary_search::DEFAULT_SEQUENCE, 23);

    // Track the probed midpoints after each highlight phase.
    let mut mids = Vec::new();
    loop {
        let report = search.step(Phase::Highlight);
        if let Some(mid) = search
            .elements()
            .iter()
            .position(|e| e.roles.has(Role::Mid))
        {
            mids.push(mid);
        }
        if report.terminated {
            break;
        }
        if search.step(Phase::Commit).terminated {
            break;
        }
    }

    assert_eq!(mids, vec![5]);
    assert!(search.found());
    assert_eq!(search.found_index(), Some(5));
    assert_eq!(search.iterations(), 2);
    assert!(search.elements()[5].roles.has(Role::Found));
}

#[test]
fn search_finds_every_present_target_within_log_bound() {
    let seq = binary_search::DEFAULT_SEQUENCE;
    let bound = (seq.len() as f64).log2().ceil() as u32 + 1;
    for &target in &seq {
        let mut search = BinarySearch::new(&seq, target);
        run_to_completion(&mut search);
        assert!(search.found(), "target {} not found", target);
        let index = search.found_index().unwrap();
        assert_eq!(search.elements()[index].value, target);
        assert!(
            search.iterations() <= bound,
            "target {} took {} iterations (bound {})",
            target,
            search.iterations(),
            bound
        );
    }
}

#[test]
fn search_reports_absent_targets_as_not_found() {
    let seq = binary_search::DEFAULT_SEQUENCE;
    for target in [1, 24, 100, -5] {
        let mut search = BinarySearch::new(&seq, target);
        let explanations = run_to_completion(&mut search);
        assert!(!search.found());
        assert!(search.low() > search.high());
        assert!(explanations.last().unwrap().contains("was not found"));
    }
}

#[test]
fn search_empty_sequence_terminates_gracefully() {
    let mut search = BinarySearch::new(&[], 5);
    let explanations = run_to_completion(&mut search);
    assert!(explanations.last().unwrap().contains("Nothing to search"));
    assert!(!search.found());
}

#[test]
fn search_add_value_keeps_sequence_sorted() {
    let mut search = BinarySearch::new(&binary_search::DEFAULT_SEQUENCE, 23);
    search.add_value(40);
    search.add_value(1);
    search.add_value(99);
    let values: Vec<i64> = search.elements().iter().map(|e| e.value).collect();
    assert!(is_non_decreasing(&values));
    assert_eq!(values.len(), binary_search::DEFAULT_SEQUENCE.len() + 3);
}

#[test]
fn commit_without_a_probed_midpoint_reports_instead_of_blanking() {
    let mut search = BinarySearch::new(&binary_search::DEFAULT_SEQUENCE, 23);
    let report = search.step(Phase::Commit);
    assert!(!report.terminated);
    assert!(!report.explanation.is_empty());

    let mut sort = QuickSort::new(&quick_sort::DEFAULT_SEQUENCE);
    let report = sort.step(Phase::Commit);
    assert!(!report.terminated);
    assert!(!report.explanation.is_empty());
}

#[test]
fn restart_restores_initial_configuration() {
    let mut search = BinarySearch::new(&binary_search::DEFAULT_SEQUENCE, 78);
    // Advance a couple of ticks, then restart mid-run.
    for _ in 0..2 {
        search.step(Phase::Highlight);
        search.step(Phase::Commit);
    }
    assert!(search.iterations() > 0);

    search.restart();
    assert_eq!(search.iterations(), 0);
    assert!(!search.found());
    assert_eq!(search.low(), 0);
    assert_eq!(search.high(), binary_search::DEFAULT_SEQUENCE.len() as i64 - 1);
    assert!(search.elements().iter().all(|e| e.roles.is_empty()));
}
