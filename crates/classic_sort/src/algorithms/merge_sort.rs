use crate::{Error, Sequence};

/// Merges two sorted runs into `result`, taking from `left` on ties.
///
/// `result` must hold exactly `left.len() + right.len()` elements.
pub fn merge<T, R>(left: &[T], right: &[T], result: &mut R) -> Result<(), Error>
where
    T: Ord + Clone,
    R: Sequence<Item = T> + ?Sized,
{
    let dst = result.as_mut_slice();
    if dst.len() != left.len() + right.len() {
        return Err(Error::MergeLengthMismatch {
            left: left.len(),
            right: right.len(),
            result: dst.len(),
        });
    }
    merge_into(left, right, dst);
    Ok(())
}

/// Top-down merge sort. Stable, `O(n log n)` time.
///
/// Each level copies its two halves into buffers owned by that call, sorts
/// them, and merges them back into `seq`.
pub fn merge_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    sort(seq.as_mut_slice());
}

pub(crate) fn sort<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    // The left half takes the extra element on odd lengths.
    let mid = len - len / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    sort(&mut left);
    sort(&mut right);
    merge_into(&left, &right, data);
}

fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], dst: &mut [T]) {
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            dst[k] = right[j].clone();
            j += 1;
        } else {
            dst[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    if i < left.len() {
        dst[k..].clone_from_slice(&left[i..]);
    } else if j < right.len() {
        dst[k..].clone_from_slice(&right[j..]);
    }
}
