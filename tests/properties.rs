//! Randomized property checks over seeded inputs.

use knapsack_report::{compute_statistics, select_best, AlgorithmResult, RunSequence};
use rand::{rngs::StdRng, Rng, SeedableRng};

const CASES: u64 = 200;

fn random_records(rng: &mut StdRng) -> Vec<AlgorithmResult> {
    let n = rng.gen_range(1..12);
    // Narrow value range so ties are common.
    (0..n)
        .map(|i| {
            let value = rng.gen_range(0..8);
            AlgorithmResult::new(format!("m{}", i), value, rng.gen_range(0..100), i)
        })
        .collect()
}

fn random_runs(rng: &mut StdRng) -> Vec<f64> {
    let n = rng.gen_range(1..40);
    (0..n).map(|_| rng.gen_range(1300..1700) as f64).collect()
}

#[test]
fn prop_best_is_a_first_maximum() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = random_records(&mut rng);
        let best = select_best(&records).unwrap();
        let idx = records
            .iter()
            .position(|r| std::ptr::eq(r, best))
            .expect("best must be an input element");
        assert!(records.iter().all(|r| r.value <= best.value), "seed {}", seed);
        assert!(records[..idx].iter().all(|r| r.value < best.value), "seed {}", seed);
    }
}

#[test]
fn prop_statistics_invariants() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let runs = random_runs(&mut rng);
        let s = compute_statistics(&runs).unwrap();

        let max = runs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = runs.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(s.max, max);
        assert_eq!(s.min, min);
        assert!(runs.contains(&s.max) && runs.contains(&s.min));
        assert!(s.variance >= 0.0);
        assert!((s.std_dev - s.variance.sqrt()).abs() < 1e-9);
        assert!(s.min <= s.mean && s.mean <= s.max);

        let constant = runs.iter().all(|&x| x == runs[0]);
        assert_eq!(s.variance == 0.0, constant, "seed {}", seed);

        assert_eq!(s, compute_statistics(&runs).unwrap());
    }
}

#[test]
fn prop_constant_sequences_have_zero_spread() {
    for seed in 0..CASES {
        let mut rng = StdRng::seed_from_u64(seed);
        let x: f64 = rng.gen_range(-1e6..1e6);
        let n = rng.gen_range(1..50);
        let s = compute_statistics(&vec![x; n]).unwrap();
        assert_eq!((s.mean, s.variance, s.std_dev), (x, 0.0, 0.0));
    }
}

#[test]
fn prop_prefix_statistics_are_fresh_recomputations() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let runs = RunSequence::new(random_runs(&mut rng));
        let prefixes = runs.prefix_statistics();
        assert_eq!(prefixes.len(), runs.len());
        for (k, p) in prefixes.iter().enumerate() {
            assert_eq!(*p, compute_statistics(&runs.as_slice()[..=k]).unwrap());
        }
    }
}
