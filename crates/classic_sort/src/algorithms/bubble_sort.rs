use crate::Sequence;

/// Bubble sort. In place and stable, quadratic even on sorted input.
pub fn bubble_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq.as_mut_slice());
}

pub(crate) fn sort<T: Ord>(data: &mut [T]) {
    // After the pass for `i`, `data[i]` holds the largest of `data[..=i]`.
    for i in (0..data.len()).rev() {
        for j in 0..i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_stable, tagged};

    #[test]
    fn sorts_reverse_input() {
        let mut data = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        bubble_sort(&mut data);
        assert_eq!(data, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        let mut data = tagged(&[2, 0, 2, 1, 0, 2, 1]);
        bubble_sort(&mut data);
        assert_stable(&data);
    }

    #[test]
    fn trivial_lengths() {
        let mut empty: [u8; 0] = [];
        bubble_sort(&mut empty);

        let mut one = vec![-4];
        bubble_sort(&mut one);
        assert_eq!(one, [-4]);
    }
}
