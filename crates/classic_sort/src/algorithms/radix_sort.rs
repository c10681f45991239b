use log::{debug, trace};

use crate::{DEFAULT_CONFIG, Error, IntegerKey, RadixBase, Sequence, SortConfig};

use super::common;

/// LSD radix sort for keys in `[0, max_key]`, base chosen from the input length.
///
/// Each digit pass is a stable bucket distribution with `base` buckets, so
/// the total cost is `O(d * (n + base))` with `d` digits of `max_key`.
pub fn radix_sort<S>(seq: &mut S, max_key: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey + Clone,
{
    sort(seq.as_mut_slice(), max_key, &DEFAULT_CONFIG)
}

/// Radix sort with an explicit `base >= 2`.
pub fn radix_sort_with_base<S>(seq: &mut S, max_key: usize, base: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey + Clone,
{
    let config = SortConfig {
        radix_base: RadixBase::Fixed(base),
        ..DEFAULT_CONFIG
    };
    sort(seq.as_mut_slice(), max_key, &config)
}

pub(crate) fn sort<T>(data: &mut [T], max_key: usize, config: &SortConfig) -> Result<(), Error>
where
    T: IntegerKey + Clone,
{
    let base = config.radix_base.resolve(data.len());
    if base < 2 {
        return Err(Error::InvalidRadix { base });
    }
    common::validate_keys(data, max_key)?;
    if data.len() < 2 {
        return Ok(());
    }

    debug!(
        "radix sort: {} elements, base {base}, {} digit passes",
        data.len(),
        digit_count(max_key, base)
    );

    // `divisor` is `base^position`; stop once it exceeds every key.
    let mut divisor = 1usize;
    let mut position = 0usize;
    loop {
        trace!("radix sort: pass {position}, divisor {divisor}");
        common::distribute(data, base, |x| digit(x.key(), divisor, base));

        match divisor.checked_mul(base) {
            Some(next) if next <= max_key => {
                divisor = next;
                position += 1;
            }
            _ => break,
        }
    }
    Ok(())
}

#[inline(always)]
fn digit(key: usize, divisor: usize, base: usize) -> usize {
    (key / divisor) % base
}

/// Number of base-`base` digits needed for `max_key`, at least one.
pub(crate) fn digit_count(max_key: usize, base: usize) -> usize {
    debug_assert!(base >= 2);

    let mut count = 1usize;
    let mut rest = max_key / base;
    while rest > 0 {
        count += 1;
        rest /= base;
    }
    count
}
