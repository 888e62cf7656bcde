//! `sortviz.toml` parsing.
//!
//! An explicit `--config` path wins, otherwise `sortviz.toml` in the current
//! directory is used when present, otherwise the defaults apply.

use crate::algo::series::{DEFAULT_SIZES, DEFAULT_VALUE_BOUND};
use crate::app::error::{Result, VisualizerError};
use rand::{rngs::StdRng, SeedableRng};
use serde_derive::Deserialize;
use std::path::Path;
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "sortviz.toml";
pub const DEFAULT_ARRAY_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// length of the array for `generate` and `sort`
    pub array_size: usize,
    /// generated values fall in `0..value_bound`
    pub value_bound: i64,
    /// array sizes of the batch comparison
    pub sizes: Vec<usize>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            array_size: DEFAULT_ARRAY_SIZE,
            value_bound: DEFAULT_VALUE_BOUND,
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.is_file() {
                    Self::load_from(local)
                } else {
                    debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| VisualizerError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| VisualizerError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// command line flags take precedence over the file.
    pub fn with_overrides(mut self, seed: Option<u64>, sizes: Option<Vec<usize>>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(sizes) = sizes {
            self.sizes = sizes;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.value_bound < 1 {
            return Err(VisualizerError::InvalidValueBound(self.value_bound));
        }
        Ok(())
    }

    // only the batch comparison reads `sizes`
    pub fn validate_sizes(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(VisualizerError::EmptySizes);
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
