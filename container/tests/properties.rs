use container::{set, Seq, Set};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const NUM_SAMPLES: usize = 200;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Random sequences of small integers, so that duplicates are frequent.
fn samples(seed: u64) -> impl Iterator<Item = Vec<u8>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..NUM_SAMPLES).map(move |_| {
        let len = rng.random_range(0..40);
        (0..len).map(|_| rng.random_range(0..16)).collect()
    })
}

#[test]
fn scenario_a_b_b() {
    init_logs();
    let got = Set::of(["a", "b", "b"]);
    assert_eq!(got, set!["a", "b"]);
    assert_eq!(got.len(), 2);
    assert_eq!(got.into_sorted(), vec!["a", "b"]);
}

#[test]
fn empty_input() {
    init_logs();
    let set: Set<String> = Set::of(Vec::new());
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
fn deduplication() {
    init_logs();
    for es in samples(1) {
        let set = Set::of(es.iter().copied());
        let distinct: HashSet<u8> = es.iter().copied().collect();
        assert_eq!(set.len(), distinct.len());
        for e in &es {
            assert!(set.contains(e), "{e} missing from {set}");
        }
        for e in &set {
            assert!(es.contains(e));
        }
    }
}

#[test]
fn order_independence() {
    init_logs();
    let mut rng = SmallRng::seed_from_u64(2);
    for es in samples(3) {
        let mut permuted = es.clone();
        permuted.shuffle(&mut rng);
        assert_eq!(Set::of(es), Set::of(permuted));
    }
}

#[test]
fn idempotence_under_repetition() {
    init_logs();
    for es in samples(4) {
        let twice: Vec<u8> = es.iter().chain(es.iter()).copied().collect();
        assert_eq!(es.clone().to_set(), twice.to_set());
    }
}

#[test]
fn duplicate_variants_are_equal() {
    init_logs();
    let a = set!['x', 'y', 'z'];
    let b = set!['z', 'z', 'y', 'x', 'y'];
    assert_eq!(a, b);
    assert_ne!(a, set!['x', 'y']);
}

#[test]
fn presize_does_not_change_membership() {
    init_logs();
    // iterator with an inexact size hint
    let filtered = (0..100u32).map(|i| i % 7).filter(|i| i % 2 == 0);
    assert_eq!(Set::of(filtered), set![0, 2, 4, 6]);
}
