//! Benchmark harness comparing the naive and optimized duplicate finders.

pub mod bench;
pub mod config;
pub mod process;
pub mod report;

pub use dupscan_core::{DuplicateSet, Finder};

/// Install the global logger.
///
/// With `None` the filter comes from `RUST_LOG` (default `info`).
pub fn setup(level: Option<log::LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }

    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialized: {e}");
    }
}
