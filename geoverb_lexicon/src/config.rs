//! Configuration for the lexicon engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LexiconConfig {
    /// Directory holding the four source files.
    #[serde(default = "LexiconConfig::default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            search: SearchConfig::default(),
        }
    }
}

impl LexiconConfig {
    fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }

    /// Load configuration from a JSON file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// Candidates accumulated before deduplicated results stop growing.
    #[serde(default = "SearchConfig::default_candidate_limit")]
    pub candidate_limit: usize,
    /// Hits returned to the caller.
    #[serde(default = "SearchConfig::default_result_limit")]
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidate_limit: Self::default_candidate_limit(),
            result_limit: Self::default_result_limit(),
        }
    }
}

impl SearchConfig {
    const fn default_candidate_limit() -> usize {
        50
    }

    const fn default_result_limit() -> usize {
        30
    }
}
