//! The introspective sort and the algorithms it is built from.
//!
//! Introsort is a hybrid of:
//! - **Quicksort**: median-of-three pivot, Hoare partition, recursion on both halves.
//! - **Heapsort**: taken over a sub-range once its recursion budget is spent, which
//!   bounds the worst case at O(n log n).
//! - **Insertion Sort**: fallback for ranges of at most [`INSERTION_THRESHOLD`] elements.
//!
//! Before doing any work on a range, introsort scans it once and stops if it is
//! already ordered, so sorted input costs `n - 1` comparisons.
//!
//! Every sort comes in two flavours: `name` using the natural order, and `name_by`
//! taking an "is less" predicate.

use crate::core::{INSERTION_THRESHOLD, Sequence, depth_budget, is_sorted_impl};
use crate::heap::Heap;
use crate::partition::{choose_pivot, partition};
use tracing::debug;

/// Sorts `seq` with the introspective sort.
///
/// # Examples
///
/// ```
/// use introsort::intro_sort;
///
/// let mut data = [5, 3, 8, 1, 9, 2];
/// intro_sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn intro_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    intro_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with the introspective sort under `is_less`.
///
/// ```
/// use introsort::intro_sort_by;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// intro_sort_by(&mut data, |a, b| a > b);
///
/// assert_eq!(data, vec![9, 8, 5, 3, 2, 1]);
/// ```
pub fn intro_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    intro_sort_by_with_stats(seq, &mut is_less);
}

/// Counters describing which paths one introsort call took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntroStats {
    /// Ranges that were found already sorted and left alone.
    pub early_exits: usize,
    /// Ranges handed to insertion sort.
    pub insertion_fallbacks: usize,
    /// Ranges handed to heapsort after the depth budget ran out.
    pub heapsort_fallbacks: usize,
    /// Partition steps performed.
    pub partitions: usize,
    /// Deepest recursion level visited, the top-level range being level 0.
    pub max_depth: usize,
}

/// Like [`intro_sort_by`] but reports which paths the sort took.
///
/// ```
/// use introsort::intro_sort_by_with_stats;
///
/// let mut data = [1, 2, 3, 4, 5];
/// let stats = intro_sort_by_with_stats(&mut data, |a, b| a < b);
///
/// assert_eq!(stats.early_exits, 1);
/// assert_eq!(stats.partitions, 0);
/// ```
pub fn intro_sort_by_with_stats<S, F>(seq: &mut S, mut is_less: F) -> IntroStats
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut stats = IntroStats::default();
    let v = seq.as_mut_slice();
    if v.len() > 1 {
        let budget = depth_budget(v.len());
        intro_sort_rec(v, &mut is_less, budget, 0, &mut stats);
    }
    stats
}

fn intro_sort_rec<T, F>(
    v: &mut [T],
    is_less: &mut F,
    budget: usize,
    level: usize,
    stats: &mut IntroStats,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    stats.max_depth = stats.max_depth.max(level);

    if len <= 1 {
        return;
    }

    if is_sorted_impl(v, is_less) {
        stats.early_exits += 1;
        return;
    }

    if len <= INSERTION_THRESHOLD {
        stats.insertion_fallbacks += 1;
        insertion_sort_impl(v, is_less);
        return;
    }

    if budget == 0 {
        debug!(len, level, "introsort depth budget exhausted, switching to heapsort");
        stats.heapsort_fallbacks += 1;
        heap_sort_impl(v, is_less);
        return;
    }

    let pivot = choose_pivot(v, is_less);
    let mid = partition(v, &pivot, is_less);
    stats.partitions += 1;

    let (left, right) = v.split_at_mut(mid);
    intro_sort_rec(left, is_less, budget - 1, level + 1, stats);
    intro_sort_rec(right, is_less, budget - 1, level + 1, stats);
}

/// Sorts `seq` with a plain median-of-three quicksort.
///
/// There is no depth budget, so adversarial input can take O(n^2) comparisons. Prefer
/// [`intro_sort`] unless that behaviour is what you want to observe.
///
/// Only the shorter side of each split is sorted recursively, so the stack depth stays
/// O(log n) even on input that drives the comparison count quadratic.
pub fn quick_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    quick_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with a plain median-of-three quicksort under `is_less`.
pub fn quick_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    quick_sort_impl(seq.as_mut_slice(), &mut is_less);
}

fn quick_sort_impl<T, F>(mut v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let len = v.len();
        let pivot = choose_pivot(v, is_less);
        // A valid comparator never yields 0 or len here. Clamping keeps a broken one from
        // looping on the same range forever.
        let mid = partition(v, &pivot, is_less).clamp(1, len - 1);

        // Recurse into the shorter half and keep looping on the longer one, so the call
        // stack never grows past log2(len) frames.
        let (left, right) = std::mem::take(&mut v).split_at_mut(mid);
        if left.len() < right.len() {
            quick_sort_impl(left, is_less);
            v = right;
        } else {
            quick_sort_impl(right, is_less);
            v = left;
        }
    }
}

/// Sorts `seq` with heapsort. Not stable, O(n log n) in every case, no allocation.
///
/// ```
/// use introsort::heap_sort;
///
/// let mut data = vec![4, 10, 3, 5, 1];
/// heap_sort(&mut data);
///
/// assert_eq!(data, vec![1, 3, 4, 5, 10]);
/// ```
pub fn heap_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    heap_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with heapsort under `is_less`.
pub fn heap_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    heap_sort_impl(seq.as_mut_slice(), &mut is_less);
}

pub(crate) fn heap_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }
    Heap::new(v, is_less).sort();
}

/// Sorts `seq` with insertion sort. Stable, O(n^2) worst case, O(n) on sorted input.
pub fn insertion_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    insertion_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with insertion sort under `is_less`.
pub fn insertion_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    insertion_sort_impl(seq.as_mut_slice(), &mut is_less);
}

/// Inserts each element into the sorted prefix before it.
///
/// The insertion point is found by walking back from the element while it is less
/// than its left neighbour, then the gap is closed with a single rotation.
pub(crate) fn insertion_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[i], &v[j - 1]) {
            j -= 1;
        }
        if j < i {
            v[j..=i].rotate_right(1);
        }
    }
}
