use std::fmt::Display;
use std::time::{Duration, Instant};

use dupscan_core::Finder;

pub const DEFAULT_SAMPLE_LEN: usize = 1000;

/// Repeats appended to the sequential part of the sample
const SAMPLE_TAIL: [u64; 6] = [1, 2, 3, 1, 2, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub finder: Finder,
    /// Sorted ascending
    pub duplicates: Vec<u64>,
    pub elapsed: Duration,
}

impl Display for ProcessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Found duplicates: {:?}. Processing took {:.6} seconds ({})",
            self.duplicates,
            self.elapsed.as_secs_f64(),
            self.finder
        )
    }
}

/// `0..len` followed by a few known repeats.
pub fn sample(len: usize) -> Vec<u64> {
    (0..len as u64).chain(SAMPLE_TAIL).collect()
}

/// Run one finder over [`sample`] and time it.
pub fn process(len: usize, finder: Finder) -> ProcessOutcome {
    let data = sample(len);

    let start = Instant::now();
    let found = finder.find(&data);
    let elapsed = start.elapsed();

    let mut duplicates: Vec<u64> = found.into_iter().collect();
    duplicates.sort_unstable();
    log::debug!("{finder} finder scanned {} values in {elapsed:?}", data.len());

    ProcessOutcome {
        finder,
        duplicates,
        elapsed,
    }
}
