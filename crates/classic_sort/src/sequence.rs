//! Contiguous sequences the sorts operate on.

use arrayvec::ArrayVec;

/// An ordered, indexable, fixed-length view over elements.
///
/// - Algorithms only touch positions in `[0, len)`.
/// - Every implementation hands out the same backing slice, so an algorithm
///   behaves identically on a growable `Vec`, an array, or an `ArrayVec`
///   buffer with an explicit length.
pub trait Sequence {
    type Item;

    fn as_slice(&self) -> &[Self::Item];
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// Only the live prefix `[0, len)` is exposed, spare capacity stays invisible.
impl<T, const CAP: usize> Sequence for ArrayVec<T, CAP> {
    type Item = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        ArrayVec::as_slice(self)
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        ArrayVec::as_mut_slice(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
        seq.as_slice().first()
    }

    #[test]
    fn array_vec_exposes_only_live_prefix() {
        let mut buf: ArrayVec<i32, 8> = ArrayVec::new();
        buf.push(3);
        buf.push(1);

        assert_eq!(Sequence::len(&buf), 2);
        assert!(!Sequence::is_empty(&buf));
        assert_eq!(Sequence::as_slice(&buf), &[3, 1]);

        Sequence::as_mut_slice(&mut buf).swap(0, 1);
        assert_eq!(buf.as_slice(), &[1, 3]);
    }

    #[test]
    fn representations_agree() {
        let array = [4, 2, 9];
        let vec = vec![4, 2, 9];
        let slice: &[i32] = &[4, 2, 9];
        let buf: ArrayVec<i32, 3> = ArrayVec::from([4, 2, 9]);

        assert_eq!(first(&array), Some(&4));
        assert_eq!(first(&vec), Some(&4));
        assert_eq!(first(slice), Some(&4));
        assert_eq!(first(&buf), Some(&4));

        let empty: Vec<u8> = Vec::new();
        assert!(Sequence::is_empty(&empty));
        assert_eq!(first(&empty), None);
    }
}
