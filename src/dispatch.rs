//! Runtime selection of a comparison sort and the checked range entry points.
//!
//! [`Algorithm`] names every comparison sort in the crate so the choice can come from
//! configuration (it parses from strings such as `"intro"` or `"heapsort"`).
//! [`sort_range`] covers the "first, last" calling convention: the range is validated
//! instead of panicking on a bad index.

use crate::algo::{heap_sort_by, insertion_sort_by, intro_sort_by, quick_sort_by};
use crate::classic::{bubble_sort_by, merge_sort_by, selection_sort_by, shell_sort_by};
use crate::core::Sequence;
use crate::error::SortError;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::trace;

/// A comparison sort provided by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Intro,
    Heap,
    Shell,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Intro,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Merge,
    ];

    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Intro => "intro",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::Merge => "merge",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge)
    }

    /// Sorts `seq` with this algorithm in natural order.
    pub fn sort<S>(self, seq: &mut S)
    where
        S: Sequence + ?Sized,
        S::Item: Ord + Clone,
    {
        self.sort_by(seq, |a, b| a.lt(b));
    }

    /// Sorts `seq` with this algorithm under `is_less`.
    pub fn sort_by<S, F>(self, seq: &mut S, is_less: F)
    where
        S: Sequence + ?Sized,
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        trace!(algorithm = self.name(), "dispatching sort");
        match self {
            Algorithm::Bubble => bubble_sort_by(seq, is_less),
            Algorithm::Insertion => insertion_sort_by(seq, is_less),
            Algorithm::Selection => selection_sort_by(seq, is_less),
            Algorithm::Quick => quick_sort_by(seq, is_less),
            Algorithm::Intro => intro_sort_by(seq, is_less),
            Algorithm::Heap => heap_sort_by(seq, is_less),
            Algorithm::Shell => shell_sort_by(seq, is_less),
            Algorithm::Merge => merge_sort_by(seq, is_less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the canonical name, optionally followed by `sort` or `_sort`/`-sort`,
    /// case-insensitively: `"intro"`, `"IntroSort"`, `"intro_sort"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("sort")
            .map(|rest| rest.trim_end_matches(['_', '-']))
            .unwrap_or(normalized.as_str());

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == stem)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Sorts `seq[range]` in natural order with `algorithm`.
///
/// ```
/// use introsort::{Algorithm, sort_range};
///
/// let mut data = vec![9, 4, 7, 1, 3];
/// sort_range(Algorithm::Intro, &mut data, 1..4).unwrap();
/// assert_eq!(data, vec![9, 1, 4, 7, 3]);
///
/// assert!(sort_range(Algorithm::Intro, &mut data, 2..9).is_err());
/// ```
pub fn sort_range<S>(
    algorithm: Algorithm,
    seq: &mut S,
    range: Range<usize>,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    sort_range_by(algorithm, seq, range, |a, b| a.lt(b))
}

/// Sorts `seq[range]` under `is_less` with `algorithm`.
pub fn sort_range_by<S, F>(
    algorithm: Algorithm,
    seq: &mut S,
    range: Range<usize>,
    is_less: F,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let v = seq.as_mut_slice();
    let Range { start, end } = range;
    if start > end {
        return Err(SortError::InvertedRange { start, end });
    }
    if end > v.len() {
        return Err(SortError::RangeOutOfBounds {
            start,
            end,
            len: v.len(),
        });
    }

    algorithm.sort_by(&mut v[start..end], is_less);
    Ok(())
}
