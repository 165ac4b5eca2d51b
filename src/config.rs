//! Configuration loading for Morpho.
//!
//! Configuration follows a precedence chain:
//! 1. Environment variables (highest priority)
//! 2. Project config (`morpho.toml` in cwd)
//! 3. User config (`<config dir>/morpho/config.toml`)
//! 4. Defaults (lowest priority)
//!
//! All configuration is optional. The tool runs with sensible defaults when no
//! config exists.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MorphoError, Result};

/// Main configuration struct for Morpho.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Corpus location and default level.
    pub corpus: CorpusConfig,
    /// Search behavior tunables.
    pub search: SearchConfig,
    /// Morphology index skip sets.
    pub index: IndexConfig,
}

/// Corpus location and default proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Default proficiency level ("B2", "C1", or "C2").
    pub level: String,
    /// Directory containing the JSON datasets.
    pub data_dir: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            level: "C1".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Search behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (after trimming) are a "no search" state.
    pub min_query_len: usize,
    /// Per-category cap on displayed results.
    pub max_display: usize,
    /// Debounce delay for query re-evaluation, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_display: 40,
            debounce_ms: 180,
        }
    }
}

/// Skip sets for the three morphology indexes.
///
/// The literal placeholder `"无"` is always excluded regardless of these sets;
/// they exist for dataset-specific placeholders (`"词干"` in root fields).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndexConfig {
    pub prefix_skip: Vec<String>,
    pub root_skip: Vec<String>,
    pub suffix_skip: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            prefix_skip: Vec::new(),
            root_skip: vec!["词干".to_string(), "无".to_string()],
            suffix_skip: Vec::new(),
        }
    }
}

/// Materialized skip sets, ready to hand to the indexer.
#[derive(Debug, Clone, Default)]
pub struct IndexSkips {
    pub prefix: HashSet<String>,
    pub root: HashSet<String>,
    pub suffix: HashSet<String>,
}

impl IndexConfig {
    /// Materialize the configured skip lists as hash sets.
    pub fn skips(&self) -> IndexSkips {
        IndexSkips {
            prefix: self.prefix_skip.iter().cloned().collect(),
            root: self.root_skip.iter().cloned().collect(),
            suffix: self.suffix_skip.iter().cloned().collect(),
        }
    }
}

/// User config directory (`<config dir>/morpho`), if resolvable.
pub fn morpho_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("morpho"))
}

impl Config {
    /// Load configuration with the full precedence chain.
    pub fn load() -> Self {
        match env::current_dir() {
            Ok(cwd) => Self::load_from_cwd(&cwd),
            Err(_) => {
                let mut config = Config::default();
                if let Some(user_config) = Self::load_user_config() {
                    config = user_config;
                }
                config.apply_env_overrides();
                config
            }
        }
    }

    /// Load configuration with a specific working directory.
    pub fn load_from_cwd(cwd: &Path) -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = user_config;
        }
        if let Some(project_config) = Self::load_project_config(cwd) {
            config = project_config;
        }
        config.apply_env_overrides();
        config
    }

    /// Load user config from `<config dir>/morpho/config.toml`.
    fn load_user_config() -> Option<Config> {
        let dir = morpho_config_dir()?;
        Self::load_from_file(&dir.join("config.toml")).ok()
    }

    /// Load project config from `morpho.toml` in the given directory.
    fn load_project_config(cwd: &Path) -> Option<Config> {
        Self::load_from_file(&cwd.join("morpho.toml")).ok()
    }

    /// Load config from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| MorphoError::corpus(path, e))?;
        toml::from_str(&content).map_err(|e| MorphoError::config(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("MORPHO_LEVEL") {
            if val.parse::<crate::corpus::Level>().is_ok() {
                self.corpus.level = val.trim().to_uppercase();
            } else {
                eprintln!(
                    "Warning: Invalid MORPHO_LEVEL value '{}'. \
                    Valid values: B2, C1, C2. Using '{}'.",
                    val, self.corpus.level
                );
            }
        }

        if let Ok(val) = env::var("MORPHO_DATA_DIR") {
            if !val.trim().is_empty() {
                self.corpus.data_dir = PathBuf::from(val);
            }
        }

        if let Ok(val) = env::var("MORPHO_MAX_DISPLAY") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => self.search.max_display = n,
                _ => eprintln!(
                    "Warning: Invalid MORPHO_MAX_DISPLAY value '{}'. \
                    Expected a positive integer. Using '{}'.",
                    val, self.search.max_display
                ),
            }
        }

        if let Ok(val) = env::var("MORPHO_DEBOUNCE_MS") {
            match val.parse::<u64>() {
                Ok(n) => self.search.debounce_ms = n,
                Err(_) => eprintln!(
                    "Warning: Invalid MORPHO_DEBOUNCE_MS value '{}'. \
                    Expected an integer. Using '{}'.",
                    val, self.search.debounce_ms
                ),
            }
        }
    }
}
