use crate::Sequence;

/// Insertion sort. In place and stable, linear on already sorted input.
pub fn insertion_sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq.as_mut_slice());
}

pub(crate) fn sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut dest = i;
        // Strict `<` keeps equal elements in their original order.
        while dest > 0 && data[i] < data[dest - 1] {
            dest -= 1;
        }
        // Shifts `data[dest..i]` one slot right and drops the held value at `dest`.
        data[dest..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_stable, tagged};

    #[test]
    fn sorts_textbook_example() {
        let mut data = vec![5, 2, 4, 6, 1, 3];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        let mut data = tagged(&[3, 1, 3, 2, 1, 3, 0]);
        insertion_sort(&mut data);
        assert_stable(&data);
    }

    #[test]
    fn sorted_input_is_untouched() {
        let mut data = [1, 1, 2, 3, 5, 8, 13];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn non_copy_elements() {
        let mut data = vec!["pear".to_string(), "fig".into(), "apple".into()];
        insertion_sort(&mut data);
        assert_eq!(data, ["apple", "fig", "pear"]);
    }
}
