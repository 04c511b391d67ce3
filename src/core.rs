//! Core traits and shared helpers.
//!
//! This module defines:
//! - [`Sequence`]: The trait every sort entry point accepts.
//! - [`is_sorted`] / [`is_sorted_by`]: The single query operation of the crate.

use std::collections::VecDeque;

/// Small ranges at or below this length are handed to insertion sort by the
/// introspective sort.
pub const INSERTION_THRESHOLD: usize = 16;

/// A random-access sequence that can be sorted in place.
///
/// Every sort in this crate takes `&mut S where S: Sequence + ?Sized`, so the same
/// function accepts a slice, a sub-range of a slice, a fixed-size array or an owning
/// container. Sorting a sub-range is done by slicing first:
///
/// ```
/// use introsort::intro_sort;
///
/// let mut data = vec![9, 4, 7, 1, 3];
/// intro_sort(&mut data[1..4]);
///
/// assert_eq!(data, vec![9, 1, 4, 7, 3]);
/// ```
///
/// Implementing for a custom container:
///
/// ```
/// use introsort::core::Sequence;
///
/// struct Scores {
///     values: Vec<u32>,
/// }
///
/// impl Sequence for Scores {
///     type Item = u32;
///
///     fn as_mut_slice(&mut self) -> &mut [u32] {
///         &mut self.values
///     }
/// }
///
/// let mut scores = Scores { values: vec![3, 1, 2] };
/// introsort::heap_sort(&mut scores);
/// assert_eq!(scores.values, vec![1, 2, 3]);
/// ```
pub trait Sequence {
    /// Element type of the sequence.
    type Item;

    /// Grants exclusive access to the elements as one contiguous slice for the
    /// duration of a sort.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// Rotates the ring buffer so its storage is contiguous; O(n) at most once per sort.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.make_contiguous()
    }
}

/// Returns `true` if `v` is in non-descending natural order.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, |a, b| a.lt(b))
}

/// Returns `true` if no element of `v` is less than its predecessor under `is_less`.
///
/// Performs a single forward scan and stops at the first inversion, so a sorted
/// slice of length `n` costs exactly `n - 1` comparator calls.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_sorted_impl(v, &mut is_less)
}

#[inline]
pub(crate) fn is_sorted_impl<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

/// Recursion budget of the introspective sort: `2 * floor(log2(len))`.
///
/// Lengths 0 and 1 yield 0.
pub fn depth_budget(len: usize) -> usize {
    if len <= 1 { 0 } else { 2 * len.ilog2() as usize }
}
