mod algorithms;
mod display;
mod err;
mod keyed;
mod sequence;

use std::fmt;

use log::debug;

pub use algorithms::bubble_sort::bubble_sort;
pub use algorithms::common::{Extremum, exchange, find_extremum, find_max, find_min, is_sorted};
pub use algorithms::counting_sort::counting_sort;
pub use algorithms::insertion_sort::insertion_sort;
pub use algorithms::merge_sort::{merge, merge_sort};
pub use algorithms::quick_sort::{quick_sort, quick_sort_range};
pub use algorithms::radix_sort::{radix_sort, radix_sort_with_base};
pub use algorithms::selection_sort::selection_sort;
pub use display::{Bracketed, bracketed};
pub use err::Error;
pub use keyed::{IntegerKey, Keyed, max_key};
pub use sequence::Sequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CostModel {
    /// Elements are opaque and only compared with `<` / `>`.
    Comparison,
    /// Elements carry small non-negative integer keys usable as indices.
    Ram,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    SelectionSort,
    InsertionSort,
    BubbleSort,
    MergeSort,
    QuickSort,
    CountingSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 7] = [
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
    }
}

pub fn cost_model(algo: SortAlgorithm) -> CostModel {
    match algo {
        SortAlgorithm::CountingSort | SortAlgorithm::RadixSort => CostModel::Ram,
        _ => CostModel::Comparison,
    }
}

/// Whether equal elements keep their input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    !matches!(
        algo,
        SortAlgorithm::SelectionSort | SortAlgorithm::QuickSort
    )
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

/// How radix sort picks its digit base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RadixBase {
    /// `max(n, 2)`, which keeps each pass at `O(n)` and the pass count at `log_n(max_key)`.
    Auto,
    Fixed(usize),
}

impl RadixBase {
    #[inline]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            RadixBase::Auto => len.max(2),
            RadixBase::Fixed(base) => base,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SortConfig {
    pub radix_base: RadixBase,
    /// Counting sort logs a warning when it needs more than `n * bucket_warn_factor` buckets.
    pub bucket_warn_factor: usize,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    radix_base: RadixBase::Auto,
    bucket_warn_factor: 64,
};

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Sorts opaque elements with a comparison-model algorithm.
///
/// RAM-model algorithms need keys and return [`Error::UnsupportedModel`].
///
/// The `Clone` bound exists for merge sort's owned halves. Elements that are
/// not `Clone` can still go through [`selection_sort`], [`insertion_sort`],
/// [`bubble_sort`] and [`quick_sort`] directly, which only need `Ord`.
pub fn sort<S>(algo: SortAlgorithm, seq: &mut S) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let data = seq.as_mut_slice();
    debug!("{algo}: sorting {} elements", data.len());

    match algo {
        SortAlgorithm::SelectionSort => algorithms::selection_sort::sort(data),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data),
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(data),
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(data),
        SortAlgorithm::CountingSort | SortAlgorithm::RadixSort => {
            return Err(Error::UnsupportedModel { algorithm: algo });
        }
    }
    Ok(())
}

pub fn sort_keyed<S>(algo: SortAlgorithm, seq: &mut S, max_key: usize) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey + Ord + Clone,
{
    sort_keyed_with_config(algo, seq, max_key, &DEFAULT_CONFIG)
}

/// Sorts integer-keyed elements with any algorithm.
///
/// RAM-model algorithms order by [`IntegerKey::key`] and require every key to
/// lie in `[0, max_key]`. Comparison-model algorithms use the element's `Ord`
/// and ignore `max_key`.
pub fn sort_keyed_with_config<S>(
    algo: SortAlgorithm,
    seq: &mut S,
    max_key: usize,
    config: &SortConfig,
) -> Result<(), Error>
where
    S: Sequence + ?Sized,
    S::Item: IntegerKey + Ord + Clone,
{
    let data = seq.as_mut_slice();
    match algo {
        SortAlgorithm::CountingSort => {
            debug!("{algo}: sorting {} elements, max key {max_key}", data.len());
            algorithms::counting_sort::sort(data, max_key, config)
        }
        SortAlgorithm::RadixSort => {
            debug!("{algo}: sorting {} elements, max key {max_key}", data.len());
            algorithms::radix_sort::sort(data, max_key, config)
        }
        _ => sort(algo, data),
    }
}
