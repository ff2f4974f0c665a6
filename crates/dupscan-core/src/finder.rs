use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use strum_macros::{Display, EnumIter, EnumString};

/// Every value that occurs at least twice in the input.
pub type DuplicateSet<T> = HashSet<T>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Finder {
    /// Pairwise comparison, O(n²). Only kept as a baseline.
    Naive,
    /// Single pass over a seen-set, O(n).
    Optimized,
}

impl Finder {
    pub fn find<T>(self, data: &[T]) -> DuplicateSet<T>
    where
        T: Eq + Hash + Clone,
    {
        match self {
            Self::Naive => find_duplicates_naive(data),
            Self::Optimized => find_duplicates(data),
        }
    }

    /// Big-O label used in reports
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Naive => "O(n^2)",
            Self::Optimized => "O(n)",
        }
    }
}

/// Compare every pair of positions and collect the values that match.
///
/// Quadratic in `data.len()`. Use [`find_duplicates`] for real work.
pub fn find_duplicates_naive<T>(data: &[T]) -> DuplicateSet<T>
where
    T: Eq + Hash + Clone,
{
    let mut duplicates = HashSet::new();
    for (i, a) in data.iter().enumerate() {
        for (j, b) in data.iter().enumerate() {
            if i != j && a == b && !duplicates.contains(a) {
                duplicates.insert(a.clone());
            }
        }
    }
    duplicates
}

/// Linear-time duplicate detection.
///
/// The first occurrence of a value lands in `seen`; any later occurrence moves
/// it into the result. A value repeated many times is reported once.
pub fn find_duplicates<T>(data: &[T]) -> DuplicateSet<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(data.len());
    let mut duplicates = HashSet::new();
    for item in data {
        if !seen.insert(item) {
            duplicates.insert(item.clone());
        }
    }
    log::trace!(
        "scanned {} values, {} distinct, {} repeated",
        data.len(),
        seen.len(),
        duplicates.len()
    );
    duplicates
}

/// Returns as soon as the first repeat is found.
pub fn has_duplicates<T>(data: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(data.len());
    for item in data {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}
