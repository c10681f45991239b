use log::{trace, warn};

use crate::{DEFAULT_CONFIG, Error, IntegerKey, Sequence, SortConfig};

use super::common;

/// Stable counting sort for keys in `[0, max_key]`.
///
/// Runs in `O(n + max_key)` time and space. Bounding `max_key` sensibly is
/// the caller's job; a bucket table far larger than the input is logged.
///
/// Every key is checked before anything moves, so on
/// [`Error::KeyOutOfRange`] the sequence is unchanged. `max_key == usize::MAX`
/// has no representable bucket count and fails with [`Error::KeyBoundTooLarge`].
/// Other bounds are allocated as asked, so one too large for memory panics or
/// aborts in the allocator.
pub fn counting_sort<S>(seq: &mut S, max_key: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey + Clone,
{
    sort(seq.as_mut_slice(), max_key, &DEFAULT_CONFIG)
}

pub(crate) fn sort<T>(data: &mut [T], max_key: usize, config: &SortConfig) -> Result<(), Error>
where
    T: IntegerKey + Clone,
{
    let Some(bucket_count) = max_key.checked_add(1) else {
        return Err(Error::KeyBoundTooLarge { max_key });
    };
    common::validate_keys(data, max_key)?;
    if data.len() < 2 {
        return Ok(());
    }

    if bucket_count > data.len().saturating_mul(config.bucket_warn_factor) {
        warn!(
            "counting sort: {bucket_count} buckets for {} elements, consider radix sort",
            data.len()
        );
    }
    trace!("counting sort: {} elements into {bucket_count} buckets", data.len());

    common::distribute(data, bucket_count, |x: &T| x.key());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Keyed;
    use crate::algorithms::testing::{assert_stable, tagged};

    #[test]
    fn stable_on_equal_keys() {
        let mut data = vec![Keyed::new(2, "a"), Keyed::new(0, "b"), Keyed::new(2, "c")];
        counting_sort(&mut data, 2).unwrap();
        assert_eq!(
            data,
            [Keyed::new(0, "b"), Keyed::new(2, "a"), Keyed::new(2, "c")]
        );
    }

    #[test]
    fn emits_the_top_bucket() {
        let mut data = [5_usize, 1, 5, 0, 3];
        counting_sort(&mut data, 5).unwrap();
        assert_eq!(data, [0, 1, 3, 5, 5]);
    }

    #[test]
    fn many_duplicates_stay_in_order() {
        let mut data = tagged(&[3, 3, 1, 0, 1, 3, 2, 0, 0, 2]);
        counting_sort(&mut data, 3).unwrap();
        assert_stable(&data);
    }

    #[test]
    fn out_of_range_key_leaves_input() {
        let mut data = vec![1_u8, 4, 2];
        assert_eq!(
            counting_sort(&mut data, 3),
            Err(Error::KeyOutOfRange {
                index: 1,
                key: 4,
                max_key: 3
            })
        );
        assert_eq!(data, [1, 4, 2]);
    }

    #[test]
    fn unrepresentable_bound_is_an_error() {
        let mut data = vec![usize::MAX, 0, 3];
        assert_eq!(
            counting_sort(&mut data, usize::MAX),
            Err(Error::KeyBoundTooLarge {
                max_key: usize::MAX
            })
        );
        assert_eq!(data, [usize::MAX, 0, 3]);
    }

    #[test]
    fn loose_bound_still_sorts() {
        let mut data = [7_u16, 2, 9];
        counting_sort(&mut data, 1_000).unwrap();
        assert_eq!(data, [2, 7, 9]);
    }
}
