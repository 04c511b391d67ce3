use introsort::Algorithm;
use introsort::intro_sort_by_with_stats;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_permutation(mut actual: Vec<i64>, mut expected: Vec<i64>) {
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_random_comparator_terminates() {
    let mut rng = StdRng::seed_from_u64(42);

    for algorithm in Algorithm::ALL {
        for _ in 0..20 {
            let len = rng.random_range(0..400);
            let input: Vec<i64> = (0..len).map(|_| rng.random_range(0..1_000)).collect();

            let mut data = input.clone();
            algorithm.sort_by(&mut data, |_, _| rng.random_bool(0.5));
            assert_permutation(data, input);
        }
    }
}

#[test]
fn test_always_less_comparator_terminates() {
    let input: Vec<i64> = (0..300).map(|i| (i * 17) % 101).collect();

    for algorithm in Algorithm::ALL {
        let mut data = input.clone();
        algorithm.sort_by(&mut data, |_, _| true);
        assert_permutation(data, input.clone());
    }
}

#[test]
fn test_never_less_comparator() {
    let input: Vec<i64> = (0..300).map(|i| (i * 17) % 101).collect();

    for algorithm in Algorithm::ALL {
        let mut data = input.clone();
        algorithm.sort_by(&mut data, |_, _| false);
        if algorithm.is_stable() {
            assert_eq!(data, input, "{algorithm}");
        } else {
            assert_permutation(data, input.clone());
        }
    }
}

#[test]
fn test_broken_comparator_exhausts_budget() {
    let mut data: Vec<i64> = (0..1_000).collect();
    let stats = intro_sort_by_with_stats(&mut data, |_, _| true);

    // Every partition puts the whole range on one side, so the budget must run out.
    assert!(stats.heapsort_fallbacks >= 1);
    assert!(stats.max_depth <= 2 * 9);
    assert_eq!(data.len(), 1_000);
}
