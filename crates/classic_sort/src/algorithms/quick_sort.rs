use crate::{Error, Sequence};

use super::common;

/// Quick sort with the last element as pivot (Lomuto partition).
///
/// Not stable. Sorted, reverse-sorted and all-equal inputs hit the quadratic
/// worst case; recursion depth stays logarithmic regardless.
pub fn quick_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq.as_mut_slice());
}

/// Sorts the inclusive range `seq[start..=end]`, leaving the rest untouched.
///
/// `start >= end` is an empty or single-element range and sorts nothing, but
/// `start` must still index into a non-empty sequence.
pub fn quick_sort_range<S>(seq: &mut S, start: usize, end: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let data = seq.as_mut_slice();
    let len = data.len();
    if start >= end {
        if len > 0 && start >= len {
            return Err(Error::IndexOutOfBounds { index: start, len });
        }
        return Ok(());
    }
    common::check_range(len, start, end)?;
    sort(&mut data[start..=end]);
    Ok(())
}

pub(crate) fn sort<T: Ord>(mut data: &mut [T]) {
    // Recurse into the smaller side and loop on the larger one, so the stack
    // stays O(log n) even when every partition is maximally unbalanced.
    while data.len() > 1 {
        let pivot_index = partition(data);
        let (left, rest) = data.split_at_mut(pivot_index);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort(left);
            data = right;
        } else {
            sort(right);
            data = left;
        }
    }
}

/// Moves everything smaller than the last element in front of it and returns
/// the pivot's final position.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let end = data.len() - 1;
    let mut pivot_index = 0usize;

    for i in 0..end {
        if data[i] < data[end] {
            data.swap(i, pivot_index);
            pivot_index += 1;
        }
    }
    data.swap(end, pivot_index);
    pivot_index
}
