use std::fmt::Display;
use std::hint::black_box;
use std::time::{Duration, Instant};

use dupscan_core::{DuplicateSet, Finder};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};
use serde::{Serialize, Serializer};

use crate::config::BenchConfig;

/// Naive time divided by optimized time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedUp {
    Ratio(f64),
    /// The optimized run finished below timer resolution.
    Infinite,
}

impl SpeedUp {
    pub fn new(naive: Duration, optimized: Duration) -> Self {
        if optimized.is_zero() {
            Self::Infinite
        } else {
            Self::Ratio(naive.as_secs_f64() / optimized.as_secs_f64())
        }
    }
}

impl Display for SpeedUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so table columns line up
        match self {
            Self::Ratio(ratio) => f.pad(&format!("{ratio:.2}x")),
            Self::Infinite => f.pad("inf"),
        }
    }
}

impl Serialize for SpeedUp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ratio(ratio) => serializer.serialize_f64(*ratio),
            Self::Infinite => serializer.serialize_str("inf"),
        }
    }
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Measurements for one input size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRow {
    pub size: usize,
    /// Sequential values plus injected repeats
    pub input_len: usize,
    #[serde(serialize_with = "as_secs")]
    pub naive: Duration,
    #[serde(serialize_with = "as_secs")]
    pub optimized: Duration,
    pub speed_up: SpeedUp,
    /// Number of distinct repeated values found
    pub duplicates: usize,
}

/// RNG for one size. A fixed seed is mixed with the size so that each row
/// gets different but reproducible data.
pub fn make_rng(seed: Option<u64>, size: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ size as u64),
        None => StdRng::from_entropy(),
    }
}

/// Build `0..size`, append `floor(size * dup_ratio)` values drawn from the
/// lower half of that range, and shuffle.
pub fn generate_input(size: usize, dup_ratio: f64, rng: &mut StdRng) -> Vec<u64> {
    let injected = (size as f64 * dup_ratio).floor() as usize;
    let half = (size / 2) as u64;

    let mut data: Vec<u64> = Vec::with_capacity(size + injected);
    data.extend(0..size as u64);
    if half > 0 {
        data.extend((0..injected).map(|_| rng.gen_range(0..half)));
    }
    data.shuffle(rng);
    data
}

fn timed<F>(find: F, data: &[u64]) -> (DuplicateSet<u64>, Duration)
where
    F: Fn(&[u64]) -> DuplicateSet<u64>,
{
    let start = Instant::now();
    let found = find(black_box(data));
    let elapsed = start.elapsed();
    (black_box(found), elapsed)
}

/// Time both finders on the same data.
///
/// # Panics
/// When the two finders return different sets. That is a bug in one of them,
/// and the numbers would be meaningless.
pub fn compare(size: usize, data: &[u64]) -> BenchRow {
    compare_with(
        size,
        data,
        |d| Finder::Naive.find(d),
        |d| Finder::Optimized.find(d),
    )
}

/// [`compare`] with caller-supplied finders.
///
/// # Panics
/// When `naive` and `optimized` return different sets.
pub fn compare_with<N, O>(size: usize, data: &[u64], naive: N, optimized: O) -> BenchRow
where
    N: Fn(&[u64]) -> DuplicateSet<u64>,
    O: Fn(&[u64]) -> DuplicateSet<u64>,
{
    let (naive_found, naive) = timed(naive, data);
    let (optimized_found, optimized) = timed(optimized, data);

    assert_eq!(
        naive_found, optimized_found,
        "naive and optimized finders disagree for size {size}"
    );
    if optimized_found.is_empty() {
        log::debug!("input for size {size} has no repeats");
    }

    BenchRow {
        size,
        input_len: data.len(),
        naive,
        optimized,
        speed_up: SpeedUp::new(naive, optimized),
        duplicates: optimized_found.len(),
    }
}

/// The optimized run lost to the naive one at a size large enough to matter.
pub fn is_regression(row: &BenchRow, floor: usize) -> bool {
    row.size >= floor && row.optimized > row.naive
}

/// Run every configured size in order.
pub fn run(config: &BenchConfig) -> Vec<BenchRow> {
    log::info!(
        "Benchmarking {} sizes (dup_ratio = {}, seed = {:?})",
        config.sizes.len(),
        config.dup_ratio,
        config.seed
    );

    config
        .sizes
        .iter()
        .map(|&size| {
            let mut rng = make_rng(config.seed, size);
            let data = generate_input(size, config.dup_ratio, &mut rng);
            let row = compare(size, &data);
            log::debug!(
                "size {size}: naive {:?}, optimized {:?}, {} repeated values",
                row.naive,
                row.optimized,
                row.duplicates
            );

            if is_regression(&row, config.regression_floor) {
                log::warn!(
                    "optimized finder was slower than naive at size {size} ({:?} > {:?})",
                    row.optimized,
                    row.naive
                );
            }
            row
        })
        .collect()
}
