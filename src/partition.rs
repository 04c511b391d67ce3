//! Pivot selection and Hoare partitioning shared by quicksort and introsort.

/// Returns the middle of three values under `is_less`.
///
/// The result is chosen by comparing values, never positions, so it is one of the
/// three arguments.
pub fn median_of_three<'a, T, F>(a: &'a T, b: &'a T, c: &'a T, is_less: &mut F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(a, b) {
        if is_less(b, c) {
            b
        } else if is_less(a, c) {
            c
        } else {
            a
        }
    } else if is_less(a, c) {
        a
    } else if is_less(b, c) {
        c
    } else {
        b
    }
}

/// Hoare partition of `v` around a pivot value that does not live inside `v`.
///
/// Elements before the returned split `mid` are not greater than `pivot`, elements
/// from `mid` on are not less than it. The pivot must be a copy taken before `v` is
/// mutated; pointing it into `v` would let swaps change it mid-scan.
///
/// Both cursors stay inside `v` even if `is_less` is not a strict weak order, so the
/// result is always in `0..=v.len()`. With a valid comparator and a pivot equal to
/// some element of `v` (as [`median_of_three`] guarantees), `0 < mid < v.len()` for
/// every `v.len() >= 2`, including all-equal input.
pub fn partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut left = 0;
    let mut right = v.len();

    loop {
        while left < right && is_less(&v[left], pivot) {
            left += 1;
        }
        if right == 0 {
            return left;
        }
        right -= 1;
        while right > left && is_less(pivot, &v[right]) {
            right -= 1;
        }
        if left >= right {
            return left;
        }
        v.swap(left, right);
        left += 1;
    }
}

/// Picks the median of the first, last and middle element of `v` and returns a copy.
///
/// `v` must not be empty.
#[inline]
pub(crate) fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> T
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    median_of_three(&v[0], &v[len - 1], &v[len / 2], is_less).clone()
}
