//! [Maximum Subarray]: Finds the contiguous, non-empty slice of a sequence
//! whose elements have the largest possible sum.
//!
//! [Maximum Subarray]: https://en.wikipedia.org/wiki/Maximum_subarray_problem

use core::cmp;
use core::ops::{Add, RangeInclusive};

use crate::error::{Error, Result};

const EMPTY: &str = "sequence must contain at least one element";

/// A contiguous slice `start..=end` of the input, together with the sum of
/// its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subarray<T> {
    /// Index of the first element of the slice.
    pub start: usize,
    /// Index of the last element of the slice (inclusive).
    pub end: usize,
    /// Sum of the elements in `start..=end`.
    pub sum: T,
}

impl<T> Subarray<T> {
    /// Returns the indices covered by the slice.
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// State of a Kadane scan after the element at `index` has been folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<T> {
    /// Position of the element just processed.
    pub index: usize,
    /// Best sum of a slice ending at `index`.
    pub current: T,
    /// Best sum of any slice ending at or before `index`.
    pub best: T,
}

/// Returns the maximum sum of any contiguous, non-empty slice of `arr`.
///
/// Uses Kadane's algorithm: the best sum of a slice ending at position `i` is
/// either `arr[i]` alone or `arr[i]` appended to the best slice ending at
/// `i - 1`. When every element is negative the result is the largest (least
/// negative) element, never zero. See [`max_subarray_sum_zero_floor`] for the
/// variant that clamps the running sum at zero.
///
/// The input is not modified. A negative running sum is dropped rather than
/// added to, so arithmetic only overflows when the sum of an actual slice
/// exceeds the range of `T`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `arr` is empty.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(*1*) extra space. Every element is visited
/// exactly once, where `n` is the number of elements in the array.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = [-2, -3, 4, -1, -2, 1, 5, -3];
/// assert_eq!(max_subarray_sum(&arr), Ok(7));
///
/// let arr = [-5, -1, -8];
/// assert_eq!(max_subarray_sum(&arr), Ok(-1));
///
/// let arr: [i32; 0] = [];
/// assert!(max_subarray_sum(&arr).is_err());
/// ```
pub fn max_subarray_sum<T>(arr: &[T]) -> Result<T>
where
    T: Copy + Ord + Add<Output = T> + Default,
{
    max_subarray_sum_inspect(arr, |_| {})
}

/// Same as [`max_subarray_sum`], but calls `inspect` with the scan state after
/// every element.
///
/// `inspect` is called exactly `arr.len()` times, in index order. The `best`
/// field of the final [`Step`] equals the returned value.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `arr` is empty. `inspect` is never
/// called in that case.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let mut running = Vec::new();
/// let best = max_subarray_sum_inspect(&[3, -4, 5, 1], |step| running.push(step.current));
///
/// assert_eq!(best, Ok(6));
/// assert_eq!(running, [3, -1, 5, 6]);
/// ```
pub fn max_subarray_sum_inspect<T, F>(arr: &[T], mut inspect: F) -> Result<T>
where
    T: Copy + Ord + Add<Output = T> + Default,
    F: FnMut(&Step<T>),
{
    let zero = T::default();

    let (&first, rest) = arr.split_first().ok_or(Error::InvalidArgument(EMPTY))?;

    let mut current = first;
    let mut best = first;

    inspect(&Step {
        index: 0,
        current,
        best,
    });

    for (i, &elem) in rest.iter().enumerate() {
        current = if current < zero { elem } else { current + elem };
        best = cmp::max(best, current);

        inspect(&Step {
            index: i + 1,
            current,
            best,
        });
    }

    Ok(best)
}

/// Returns the location and sum of a maximum-sum contiguous slice of `arr`.
///
/// When several slices share the maximum sum, the one found first by a left to
/// right scan is reported: the slice with the smallest `end`, and among those
/// the shortest. A new slice is started whenever the running sum is negative.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `arr` is empty.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time, like [`max_subarray_sum`].
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// let arr = [-2, -3, 4, -1, -2, 1, 5, -3];
/// let best = max_subarray(&arr).unwrap();
///
/// assert_eq!(best.range(), 2..=6);
/// assert_eq!(best.sum, 7);
/// ```
pub fn max_subarray<T>(arr: &[T]) -> Result<Subarray<T>>
where
    T: Copy + Ord + Add<Output = T> + Default,
{
    let zero = T::default();

    let (&first, rest) = arr.split_first().ok_or(Error::InvalidArgument(EMPTY))?;

    let mut best = Subarray {
        start: 0,
        end: 0,
        sum: first,
    };
    let mut start = 0;
    let mut current = first;

    for (i, &elem) in rest.iter().enumerate() {
        let i = i + 1;

        if current < zero {
            start = i;
            current = elem;
        } else {
            current = current + elem;
        }

        if current > best.sum {
            best = Subarray {
                start,
                end: i,
                sum: current,
            };
        }
    }

    Ok(best)
}

/// Returns the maximum running sum when the running sum is reset to zero
/// every time it drops below zero.
///
/// This is **not** the maximum subarray sum for every input. It agrees with
/// [`max_subarray_sum`] whenever at least one element is non-negative, but
/// returns zero (the sum of the empty slice) when every element is negative.
/// In other words it computes `max(0, max_subarray_sum(arr))`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `arr` is empty.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// assert_eq!(max_subarray_sum_zero_floor(&[-2, -3, 4, -1, -2, 1, 5, -3]), Ok(7));
/// assert_eq!(max_subarray_sum_zero_floor(&[-5, -1, -8]), Ok(0));
/// ```
pub fn max_subarray_sum_zero_floor<T>(arr: &[T]) -> Result<T>
where
    T: Copy + Ord + Add<Output = T> + Default,
{
    if arr.is_empty() {
        return Err(Error::InvalidArgument(EMPTY));
    }

    let zero = T::default();
    let mut current = zero;
    // The running sum is never negative after a reset, so zero is a safe
    // starting point for the maximum.
    let mut best = zero;

    for &elem in arr {
        current = current + elem;

        if current < zero {
            current = zero;
        }

        best = cmp::max(best, current);
    }

    Ok(best)
}

/// Returns the maximum subarray sum by summing every contiguous slice.
///
/// Intended as a reference for checking the linear algorithms on small
/// inputs.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `arr` is empty.
///
/// # Time Complexity
///
/// Takes *O*(*n^3*) time. There are *O*(*n^2*) pairs of start and end
/// indices, and each slice is summed from scratch.
///
/// # Examples
///
/// ```
/// use dsa::prelude::*;
///
/// assert_eq!(max_subarray_sum_brute_force(&[2, 4, 6, 8, 10]), Ok(30));
/// ```
pub fn max_subarray_sum_brute_force<T>(arr: &[T]) -> Result<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    let mut best: Option<T> = None;

    for i in 0..arr.len() {
        for j in i..arr.len() {
            let mut sum = arr[i];

            for &elem in &arr[(i + 1)..=j] {
                sum = sum + elem;
            }

            best = Some(match best {
                Some(b) => cmp::max(b, sum),
                None => sum,
            });
        }
    }

    best.ok_or(Error::InvalidArgument(EMPTY))
}
