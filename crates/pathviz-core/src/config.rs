//! Configuration for pathviz
//!
//! Optional `pathviz.toml` supplying defaults for random graph
//! generation; CLI flags always win over config values. Missing file or
//! missing keys fall back to built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::RandomGraphOptions;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pathviz.toml";

/// Defaults for random graph generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    /// Number of nodes for `pathviz random`
    pub nodes: u32,
    /// Extra-edge probability, 0-100
    pub density: u8,
    /// Maximum edge weight
    pub max_weight: u64,
}

impl Default for VizConfig {
    fn default() -> Self {
        VizConfig {
            nodes: 8,
            density: 30,
            max_weight: 10,
        }
    }
}

impl VizConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse; otherwise
    /// `pathviz.toml` in the working directory is used when present, and
    /// built-in defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Seed random-generation options from this config
    pub fn random_options(&self, seed: Option<u64>) -> RandomGraphOptions {
        RandomGraphOptions {
            nodes: self.nodes,
            density: self.density,
            max_weight: self.max_weight,
            seed,
        }
    }
}
