use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    Ascending,
    Descending,
    NearlySorted1pctSwaps,
    FewDistinct,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewDistinct,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinct => "few_distinct",
        }
    }
}

/// Criterion timing budget, picked by how long one sort of the input takes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeProfile {
    Small,
    Large,
}

impl RuntimeProfile {
    pub fn for_size(size: usize) -> Self {
        if size <= 4096 { Self::Small } else { Self::Large }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small => 15,
            Self::Large => 10,
        }
    }

    fn warm_up(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(100),
            Self::Large => Duration::from_millis(300),
        }
    }

    fn measurement(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(200),
            Self::Large => Duration::from_millis(800),
        }
    }
}

pub fn apply_runtime_profile<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    profile: RuntimeProfile,
) {
    group.sample_size(profile.sample_size());
    group.warm_up_time(profile.warm_up());
    group.measurement_time(profile.measurement());
}

/// Rng for one `(dist, size)` dataset. Identical arguments give identical keys
/// no matter which other datasets were generated first.
pub fn dataset_rng(dist: Distribution, size: usize) -> StdRng {
    let d = ALL_DISTRIBUTIONS
        .iter()
        .position(|&x| x == dist)
        .unwrap_or_default() as u64;
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ (d << 56) ^ size as u64))
}

fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// `size` keys in `[0, max_key]` shaped by `dist`.
pub fn generate_keys<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    size: usize,
    max_key: usize,
) -> Vec<usize> {
    let span = max_key.saturating_add(1);
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random_range(0..=max_key)).collect(),
        Distribution::Ascending => (0..size).map(|i| i % span).collect(),
        Distribution::Descending => (0..size).rev().map(|i| i % span).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<usize> = (0..size).map(|i| i % span).collect();
            if size > 0 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::FewDistinct => {
            let distinct = max_key.min(15);
            (0..size)
                .map(|_| rng.random_range(0..=distinct) * (max_key / distinct.max(1)))
                .collect()
        }
    }
}
