use crate::Sequence;

use super::common::{self, Extremum};

/// Selection sort. In place, not stable, always `n` outer passes.
pub fn selection_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq.as_mut_slice());
}

pub(crate) fn sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let j = i + common::extremum_index(&data[i..], Extremum::Min);
        data.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{tagged, tags};

    #[test]
    fn sorts_small_inputs() {
        let mut data = [5, 2, 4, 6, 1, 3];
        selection_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);

        let mut dup = vec![3, 1, 3, 0, 1];
        selection_sort(&mut dup);
        assert_eq!(dup, [0, 1, 1, 3, 3]);
    }

    #[test]
    fn long_range_swap_breaks_stability() {
        // The leading 2 is carried past its twin when 1 is swapped to the front.
        let mut data = tagged(&[2, 2, 1]);
        selection_sort(&mut data);
        assert_eq!(tags(&data), [2, 1, 0]);
    }
}
