//! Textbook sorts that stand on their own: bubble, selection, shell and merge sort.
//!
//! None of them is used by [`intro_sort`](crate::intro_sort). They share its calling
//! convention so callers can swap one for another.

use crate::algo::insertion_sort_impl;
use crate::core::Sequence;

/// Below this length merge sort hands the range to insertion sort.
pub const MERGE_INSERTION_THRESHOLD: usize = 32;

/// Sedgewick's gap sequence `9 * 4^k - 9 * 2^k + 1` interleaved with
/// `4^k - 3 * 2^k + 1`, covering every length representable in 62 bits.
pub static SHELL_GAPS: [u64; 61] = [
    1,
    5,
    19,
    41,
    109,
    209,
    505,
    929,
    2161,
    3905,
    8929,
    16001,
    36289,
    64769,
    146305,
    260609,
    587521,
    1045505,
    2354689,
    4188161,
    9427969,
    16764929,
    37730305,
    67084289,
    150958081,
    268386305,
    603906049,
    1073643521,
    2415771649,
    4294770689,
    9663381505,
    17179475969,
    38654115841,
    68718690305,
    154617643009,
    274876334081,
    618472931329,
    1099508482049,
    2473896443905,
    4398040219649,
    9895595212801,
    17592173461505,
    39582399725569,
    70368719011841,
    158329636651009,
    281474926379009,
    633318622101505,
    1125899806179329,
    2533274639400961,
    4503599426043905,
    10133098859593729,
    18014398106828801,
    40532396042354689,
    72057593232621569,
    162129585377378305,
    288230374541099009,
    648518343925432321,
    1152921501385621505,
    2594073380533567489,
    4611685999100035073,
    4611686011984936961,
];

/// Sorts `seq` with bubble sort.
pub fn bubble_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    bubble_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with bubble sort under `is_less`.
///
/// Each pass carries the smallest remaining element from the tail to the front of the
/// unsorted region. Stops after the first pass that swaps nothing.
pub fn bubble_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let v = seq.as_mut_slice();
    let len = v.len();
    if len <= 1 {
        return;
    }

    for i in 0..len - 1 {
        let mut swapped = false;
        for j in (i + 1..len).rev() {
            if is_less(&v[j], &v[j - 1]) {
                v.swap(j, j - 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `seq` with selection sort.
pub fn selection_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    selection_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with selection sort under `is_less`. Always `n (n - 1) / 2` comparisons.
pub fn selection_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let v = seq.as_mut_slice();
    let len = v.len();
    if len <= 1 {
        return;
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        v.swap(i, min);
    }
}

/// Sorts `seq` with shell sort.
pub fn shell_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    shell_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with shell sort under `is_less`, using [`SHELL_GAPS`] from the largest
/// gap not exceeding the length down to 1.
pub fn shell_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let v = seq.as_mut_slice();
    let len = v.len();
    if len <= 1 {
        return;
    }

    let first_gap = SHELL_GAPS.partition_point(|&gap| gap <= len as u64);
    for &gap in SHELL_GAPS[..first_gap].iter().rev() {
        // Every gap used here is at most `len`, so it fits in usize.
        let gap = gap as usize;
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}

/// Sorts `seq` with top-down merge sort. Stable.
///
/// ```
/// use introsort::merge_sort_by;
///
/// let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// merge_sort_by(&mut pairs, |a, b| a.0 < b.0);
///
/// assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    merge_sort_by(seq, |a, b| a.lt(b));
}

/// Sorts `seq` with top-down merge sort under `is_less`. Stable.
pub fn merge_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    merge_sort_impl(seq.as_mut_slice(), &mut is_less);
}

fn merge_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    if len < MERGE_INSERTION_THRESHOLD {
        insertion_sort_impl(v, is_less);
        return;
    }

    let mid = len / 2;
    merge_sort_impl(&mut v[..mid], is_less);
    merge_sort_impl(&mut v[mid..], is_less);
    merge(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// Only the left run is copied out. Ties are taken from the left run, which is what
/// keeps the sort stable.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid == len {
        return;
    }

    let mut left = v[..mid].to_vec().into_iter().peekable();
    let mut right = mid;
    let mut out = 0;

    // While the left run is not exhausted `out < right`, so writes never overtake
    // unread elements of the right run.
    while let Some(l) = left.peek() {
        if right < len && is_less(&v[right], l) {
            v.swap(out, right);
            right += 1;
        } else if let Some(l) = left.next() {
            v[out] = l;
        }
        out += 1;
    }
}
