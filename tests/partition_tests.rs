use introsort::partition::{median_of_three, partition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn less(a: &i32, b: &i32) -> bool {
    a < b
}

fn check_split(v: &[i32], pivot: i32, mid: usize) {
    assert!(v[..mid].iter().all(|&x| x <= pivot), "{v:?} split at {mid}");
    assert!(v[mid..].iter().all(|&x| x >= pivot), "{v:?} split at {mid}");
}

#[test]
fn test_median_of_three_every_order() {
    let orders = [
        (1, 2, 3),
        (1, 3, 2),
        (2, 1, 3),
        (2, 3, 1),
        (3, 1, 2),
        (3, 2, 1),
    ];
    for (a, b, c) in orders {
        assert_eq!(*median_of_three(&a, &b, &c, &mut less), 2, "{a} {b} {c}");
    }

    assert_eq!(*median_of_three(&4, &4, &1, &mut less), 4);
    assert_eq!(*median_of_three(&1, &4, &1, &mut less), 1);
    assert_eq!(*median_of_three(&5, &5, &5, &mut less), 5);
}

#[test]
fn test_median_of_three_custom_order() {
    let mut greater = |a: &i32, b: &i32| a > b;
    assert_eq!(*median_of_three(&10, &30, &20, &mut greater), 20);
}

#[test]
fn test_all_equal_splits_inside_range() {
    for len in 2..64 {
        let mut v = vec![7; len];
        let mid = partition(&mut v, &7, &mut less);
        assert!(mid > 0 && mid < len, "length {len} split at {mid}");
    }

    let mut v = vec![7; 17];
    assert_eq!(partition(&mut v, &7, &mut less), 8);
}

#[test]
fn test_two_equal_elements() {
    let mut v = vec![7, 7];
    assert_eq!(partition(&mut v, &7, &mut less), 1);
    assert_eq!(v, vec![7, 7]);
}

#[test]
fn test_pivot_from_range_splits_properly() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..500 {
        let len = rng.random_range(2..100);
        let mut v: Vec<i32> = (0..len).map(|_| rng.random_range(0..10)).collect();
        let pivot = *median_of_three(&v[0], &v[len - 1], &v[len / 2], &mut less);

        let mut before = v.clone();
        let mid = partition(&mut v, &pivot, &mut less);

        assert!(mid > 0 && mid < len);
        check_split(&v, pivot, mid);

        let mut after = v.clone();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}

#[test]
fn test_descending_partition_reverses() {
    let mut v: Vec<i32> = (0..10).rev().collect();
    let mid = partition(&mut v, &4, &mut less);
    assert_eq!(mid, 5);
    assert_eq!(v, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_cursors_stay_in_bounds_for_broken_comparators() {
    let mut v: Vec<i32> = (0..50).collect();

    let mid = partition(&mut v, &25, &mut |_: &i32, _: &i32| true);
    assert!(mid <= v.len());

    let mid = partition(&mut v, &25, &mut |_: &i32, _: &i32| false);
    assert!(mid <= v.len());

    let mut empty: Vec<i32> = vec![];
    assert_eq!(partition(&mut empty, &0, &mut less), 0);
}
