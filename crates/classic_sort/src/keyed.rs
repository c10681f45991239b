//! Integer-keyed elements for the RAM-model sorts.

use crate::Sequence;

/// Key-extraction contract for counting and radix sort.
///
/// Keys are non-negative and usable as bucket indices. Callers pass a bound
/// `max_key` with `key() <= max_key` for every element.
pub trait IntegerKey {
    fn key(&self) -> usize;
}

/// A payload tagged with an integer sort key.
///
/// Equality and ordering cover `key` first, then `value`. The RAM-model sorts
/// only ever look at `key`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyed<V> {
    pub key: usize,
    pub value: V,
}

impl<V> Keyed<V> {
    pub const fn new(key: usize, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> (usize, V) {
        (self.key, self.value)
    }
}

impl<V> From<(usize, V)> for Keyed<V> {
    fn from((key, value): (usize, V)) -> Self {
        Self { key, value }
    }
}

impl<V> IntegerKey for Keyed<V> {
    #[inline(always)]
    fn key(&self) -> usize {
        self.key
    }
}

macro_rules! impl_integer_key {
    ($($ty:ty),*) => {
        $(
            impl IntegerKey for $ty {
                #[inline(always)]
                fn key(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_integer_key!(u8, u16, usize);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_integer_key!(u32);

#[cfg(target_pointer_width = "64")]
impl_integer_key!(u64);

/// Largest key in `seq`, or `None` when it is empty.
pub fn max_key<S>(seq: &S) -> Option<usize>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey,
{
    seq.as_slice().iter().map(IntegerKey::key).max()
}
