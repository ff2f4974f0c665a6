use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const CONFIG_FILE: &str = "dupscan.toml";
pub const CONFIG_ENV: &str = "DUPSCAN_CONFIG";

pub const DEFAULT_SIZES: [usize; 4] = [100, 500, 1000, 2000];
pub const DEFAULT_DUP_RATIO: f64 = 0.1;
pub const DEFAULT_REGRESSION_FLOOR: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("At least one input size is required")]
    EmptySizes,

    #[error("Input sizes must be positive")]
    ZeroSize,

    #[error("Duplicate ratio must be within 0.0..=1.0, got {0}")]
    DupRatio(f64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Settings for one benchmark run.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of sequential values per run; one report row each
    pub sizes: Vec<usize>,
    /// Injected repeats as a fraction of the size
    pub dup_ratio: f64,
    /// Fixed seed for reproducible inputs, entropy when unset
    pub seed: Option<u64>,
    /// Smallest size at which a slower optimized run is logged as a regression
    pub regression_floor: usize,
    pub format: ReportFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            dup_ratio: DEFAULT_DUP_RATIO,
            seed: None,
            regression_floor: DEFAULT_REGRESSION_FLOOR,
            format: ReportFormat::Table,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from: {}", path.display());
        Self::from_toml_str(&content, path)
    }

    /// Load the config file if one can be found, otherwise use defaults.
    ///
    /// An explicit path must exist. Without one, `DUPSCAN_CONFIG` (after
    /// reading `.env`) and then `./dupscan.toml` are tried.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Err(e) = dotenvy::dotenv() {
            log::trace!("No .env file loaded: {e}");
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(path);
        }

        let default_path = Path::new(CONFIG_FILE);
        if default_path.is_file() {
            return Self::from_file(default_path);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        if self.sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        if !(0.0..=1.0).contains(&self.dup_ratio) {
            return Err(ConfigError::DupRatio(self.dup_ratio));
        }
        Ok(())
    }
}
