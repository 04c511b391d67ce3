//! LSD decimal radix sort for unsigned integers.
//!
//! Elements are distributed into one bucket per decimal digit, least significant digit
//! first, and gathered back in bucket order. Each pass is stable, so after
//! `digits(max)` passes the sequence is sorted.
//!
//! Only unsigned integer types implement [`RadixKey`], so sorting anything else is
//! rejected at compile time:
//!
//! ```compile_fail
//! let mut data = vec![-1i32, 3, 2];
//! introsort::radix_sort(&mut data);
//! ```

use crate::core::Sequence;
use cuneiform::cuneiform;

/// Number of buckets, one per decimal digit.
pub const RADIX: usize = 10;

mod private {
    pub trait Sealed {}

    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }

    sealed_impl! { u8 u16 u32 u64 u128 usize }
}

/// Unsigned integer types that [`radix_sort`] accepts.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait RadixKey: Copy + Ord + private::Sealed {
    /// Widens the value losslessly for digit extraction.
    fn to_u128(self) -> u128;
}

macro_rules! impl_radix_key { ($($t:ty)*) => ($(
    impl RadixKey for $t {
        #[inline(always)]
        fn to_u128(self) -> u128 {
            self as u128
        }
    }
)*) }

impl_radix_key! { u8 u16 u32 u64 u128 usize }

// Cache-aligned per-pass digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX],
}

/// Sorts a sequence of unsigned integers in ascending order.
///
/// There is no comparator variant: the order is always the natural numeric one.
///
/// # Examples
///
/// ```
/// use introsort::radix_sort;
///
/// let mut data = vec![4u32, 2, 4, 1, 3];
/// radix_sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 4]);
/// ```
pub fn radix_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: RadixKey,
{
    let v = seq.as_mut_slice();
    if v.len() <= 1 {
        return;
    }

    let Some(max) = v.iter().copied().max() else {
        return;
    };
    let passes = decimal_digits(max.to_u128());

    let mut buckets: [Vec<S::Item>; RADIX] = Default::default();
    let mut divisor: u128 = 1;

    for pass in 0..passes {
        let mut counts = DigitCounts { data: [0; RADIX] };
        let counts = &mut counts.data;
        v.iter()
            .for_each(|&x| counts[digit(x.to_u128(), divisor)] += 1);

        // A pass that puts everything in one bucket leaves the order untouched.
        if !counts.iter().any(|&count| count == v.len()) {
            buckets
                .iter_mut()
                .zip(counts.iter())
                .for_each(|(bucket, &count)| bucket.reserve(count));
            v.iter()
                .for_each(|&x| buckets[digit(x.to_u128(), divisor)].push(x));

            let mut pos = 0;
            for bucket in buckets.iter_mut() {
                for x in bucket.drain(..) {
                    v[pos] = x;
                    pos += 1;
                }
            }
        }

        if pass + 1 < passes {
            divisor *= 10;
        }
    }
}

#[inline(always)]
fn digit(x: u128, divisor: u128) -> usize {
    ((x / divisor) % RADIX as u128) as usize
}

/// Number of decimal digits in `x`; zero has one digit.
pub(crate) fn decimal_digits(mut x: u128) -> u32 {
    let mut digits = 1;
    while x >= 10 {
        x /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_counts() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(u64::MAX as u128), 20);
        assert_eq!(decimal_digits(u128::MAX), 39);
    }

    #[test]
    fn digit_extraction() {
        assert_eq!(digit(4_321, 1), 1);
        assert_eq!(digit(4_321, 100), 3);
        assert_eq!(digit(4_321, 10_000), 0);
    }
}
