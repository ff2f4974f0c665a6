//! Duplicate detection over slices of hashable values.
//!
//! Two interchangeable variants are provided: a quadratic pairwise scan kept
//! as a baseline, and the linear seen-set scan used everywhere else.

pub mod finder;

pub use finder::{
    DuplicateSet, Finder, find_duplicates, find_duplicates_naive, has_duplicates,
};
