//! # Introsort
//!
//! `introsort` is a collection of classical in-place sorting algorithms sharing one calling
//! convention, built around a hybrid **introspective sort**.
//!
//! Introsort combines the strengths of **Quicksort**, **Heapsort** and **Insertion Sort**:
//! it partitions like quicksort, hands small ranges to insertion sort, and switches a range
//! to heapsort once its recursion budget of `2 * floor(log2(n))` levels is spent.
//!
//! ## Key Features
//!
//! - **Bounded Worst Case**: O(n log n) comparisons on every input, including inputs
//!   crafted against median-of-three quicksort.
//! - **Adaptive**: every range is checked for order before any work is done, so sorted
//!   input costs a single scan.
//! - **One Calling Convention**: every algorithm accepts anything implementing [`Sequence`]
//!   (slices, sub-ranges, arrays, `Vec`, `Box<[T]>`, `VecDeque`), with an optional
//!   "is less" predicate through its `_by` variant.
//! - **In-Place**: sorts borrow the caller's data exclusively for the duration of the call
//!   and only allocate transient scratch (merge sort's half buffer, radix sort's buckets).
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use introsort::intro_sort;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! intro_sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ### Custom Order
//!
//! Every comparison sort has a `_by` variant taking a strict-weak-order "is less"
//! predicate.
//!
//! ```rust
//! use introsort::heap_sort_by;
//!
//! let mut words = ["pear", "fig", "banana", "kiwi"];
//! heap_sort_by(&mut words, |a, b| a.len() < b.len());
//!
//! assert_eq!(words[0], "fig");
//! assert_eq!(words[3], "banana");
//! ```
//!
//! ### Choosing an Algorithm at Runtime
//!
//! ```rust
//! use introsort::Algorithm;
//!
//! let algorithm: Algorithm = "shellsort".parse().unwrap();
//! let mut data = [3, 1, 2];
//! algorithm.sort(&mut data);
//!
//! assert_eq!(data, [1, 2, 3]);
//! ```
//!
//! ## Algorithms
//!
//! | Function | Stable | Worst case | Extra memory |
//! |---|---|---|---|
//! | [`intro_sort`] | no | O(n log n) | one pivot copy per partition |
//! | [`quick_sort`] | no | O(n^2) | one pivot copy per partition |
//! | [`heap_sort`] | no | O(n log n) | none |
//! | [`merge_sort`] | yes | O(n log n) | n / 2 |
//! | [`shell_sort`] | no | O(n^(4/3)) | none |
//! | [`insertion_sort`] | yes | O(n^2) | none |
//! | [`bubble_sort`] | yes | O(n^2) | none |
//! | [`selection_sort`] | no | O(n^2) | none |
//! | [`radix_sort`] | yes | O(n * digits) | n |
//!
//! A comparator that is not a strict weak order leaves the output order unspecified, but
//! no sort panics on indexing, loops forever or recurses without bound because of it.

pub mod algo;
pub mod classic;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod heap;
pub mod partition;
pub mod radix;

pub use algo::{
    IntroStats, heap_sort, heap_sort_by, insertion_sort, insertion_sort_by, intro_sort,
    intro_sort_by, intro_sort_by_with_stats, quick_sort, quick_sort_by,
};
pub use classic::{
    bubble_sort, bubble_sort_by, merge_sort, merge_sort_by, selection_sort, selection_sort_by,
    shell_sort, shell_sort_by,
};
pub use crate::core::{Sequence, is_sorted, is_sorted_by};
pub use dispatch::{Algorithm, sort_range, sort_range_by};
pub use error::SortError;
pub use heap::Heap;
pub use radix::{RadixKey, radix_sort};

pub mod prelude {
    pub use crate::algo::{heap_sort, heap_sort_by, intro_sort, intro_sort_by};
    pub use crate::core::{Sequence, is_sorted, is_sorted_by};
    pub use crate::dispatch::Algorithm;
    pub use crate::radix::radix_sort;
}
