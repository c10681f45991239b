use crate::{Error, IntegerKey, Sequence};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extremum {
    Min,
    Max,
}

/// Index of the first minimum (or maximum) of `seq[start..=end]`.
///
/// Ties resolve to the lowest index.
pub fn find_extremum<S>(
    seq: &S,
    start: usize,
    end: usize,
    mode: Extremum,
) -> Result<usize, Error>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let data = seq.as_slice();
    check_range(data.len(), start, end)?;
    Ok(start + extremum_index(&data[start..=end], mode))
}

pub fn find_min<S>(seq: &S, start: usize, end: usize) -> Result<usize, Error>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    find_extremum(seq, start, end, Extremum::Min)
}

pub fn find_max<S>(seq: &S, start: usize, end: usize) -> Result<usize, Error>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    find_extremum(seq, start, end, Extremum::Max)
}

/// Swaps the elements at `i` and `j`. Does nothing when `i == j`.
pub fn exchange<S>(seq: &mut S, i: usize, j: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
{
    let data = seq.as_mut_slice();
    let len = data.len();
    for index in [i, j] {
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
    }
    if i != j {
        data.swap(i, j);
    }
    Ok(())
}

pub fn is_sorted<S>(seq: &S) -> bool
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    is_sorted_non_decreasing(seq.as_slice())
}

#[inline]
pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<(), Error> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    if end >= len {
        return Err(Error::IndexOutOfBounds { index: end, len });
    }
    Ok(())
}

/// Relative index of the first extremum. `data` must be non-empty.
#[inline]
pub(crate) fn extremum_index<T: Ord>(data: &[T], mode: Extremum) -> usize {
    debug_assert!(!data.is_empty());

    let mut best = 0usize;
    for i in 1..data.len() {
        let better = match mode {
            Extremum::Min => data[i] < data[best],
            Extremum::Max => data[i] > data[best],
        };
        if better {
            best = i;
        }
    }
    best
}

#[inline]
pub(crate) fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Finds the first element whose key exceeds `max_key`.
pub(crate) fn validate_keys<T: IntegerKey>(data: &[T], max_key: usize) -> Result<(), Error> {
    match data.iter().position(|x| x.key() > max_key) {
        Some(index) => Err(Error::KeyOutOfRange {
            index,
            key: data[index].key(),
            max_key,
        }),
        None => Ok(()),
    }
}

/// Stable bucket distribution shared by counting sort and every radix pass.
///
/// Each element is appended to bucket `bucket_of(x)` in input order, then the
/// buckets are written back in ascending bucket order. `bucket_of` must return
/// values below `bucket_count`.
pub(crate) fn distribute<T, F>(data: &mut [T], bucket_count: usize, mut bucket_of: F)
where
    T: Clone,
    F: FnMut(&T) -> usize,
{
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];
    for x in data.iter() {
        buckets[bucket_of(x)].push(x.clone());
    }

    let mut out = 0usize;
    for bucket in buckets {
        let end = out + bucket.len();
        for (dst, x) in data[out..end].iter_mut().zip(bucket) {
            *dst = x;
        }
        out = end;
    }
    debug_assert_eq!(out, data.len());
}
