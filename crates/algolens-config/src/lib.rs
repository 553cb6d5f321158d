//! Configuration for the algolens engines.
//!
//! Load engine tunables from TOML or YAML files to adjust input bounds,
//! trie layout geometry, and the memory-model weights without code
//! changes. The engines themselves impose no limits; the bounds here are
//! for callers, which must keep exhaustive-search inputs small.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use algolens_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [queens]
//!     max_board_size = 10
//!
//!     [trie]
//!     suggestion_limit = 5
//!
//!     [trie.layout]
//!     root_span = 600.0
//! "#).unwrap();
//!
//! assert_eq!(config.queens.max_board_size, 10);
//! assert_eq!(config.trie.suggestion_limit, 5);
//! assert_eq!(config.trie.layout.level_step, 80.0);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use algolens_config::EngineConfig;
//!
//! let config = EngineConfig::load("algolens.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration, one section per engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    #[serde(default)]
    pub queens: QueensConfig,
    #[serde(default)]
    pub align: AlignConfig,
    #[serde(default)]
    pub trie: TrieConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension
    /// (`.yaml` / `.yml` parse as YAML, everything else as TOML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            _ => Self::from_toml_str(&text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Rejects limits and geometry no engine call could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queens.max_board_size == 0 {
            return Err(ConfigError::Invalid(
                "queens.max_board_size must be at least 1".into(),
            ));
        }
        if self.align.max_sequences < 2 {
            return Err(ConfigError::Invalid(
                "align.max_sequences must be at least 2".into(),
            ));
        }
        if self.trie.suggestion_limit == 0 {
            return Err(ConfigError::Invalid(
                "trie.suggestion_limit must be at least 1".into(),
            ));
        }
        let layout = &self.trie.layout;
        if layout.root_span <= 0.0 || layout.level_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "trie.layout spans must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&layout.shrink) || layout.shrink == 0.0 {
            return Err(ConfigError::Invalid(
                "trie.layout.shrink must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Caller-side bound for the exhaustive N-Queens search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueensConfig {
    /// Largest board the presentation layer should offer; the search
    /// space is super-exponential beyond this.
    #[serde(default = "default_max_board_size")]
    pub max_board_size: usize,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            max_board_size: default_max_board_size(),
        }
    }
}

fn default_max_board_size() -> usize {
    12
}

/// Caller-side bounds for the alignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AlignConfig {
    #[serde(default = "default_max_sequence_len")]
    pub max_sequence_len: usize,
    #[serde(default = "default_max_sequences")]
    pub max_sequences: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: default_max_sequence_len(),
            max_sequences: default_max_sequences(),
        }
    }
}

fn default_max_sequence_len() -> usize {
    64
}

fn default_max_sequences() -> usize {
    6
}

/// Trie engine tunables.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrieConfig {
    /// Cap on `starts_with` suggestions.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default)]
    pub layout: TrieLayoutConfig,
    #[serde(default)]
    pub memory: TrieMemoryConfig,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            layout: TrieLayoutConfig::default(),
            memory: TrieMemoryConfig::default(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    10
}

/// Geometry for the rendered tree: each node splits its horizontal span
/// equally among its children, the span shrinks per level, and `y`
/// advances a fixed step per depth.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrieLayoutConfig {
    #[serde(default = "default_root_span")]
    pub root_span: f64,
    #[serde(default = "default_level_step")]
    pub level_step: f64,
    #[serde(default = "default_shrink")]
    pub shrink: f64,
}

impl Default for TrieLayoutConfig {
    fn default() -> Self {
        Self {
            root_span: default_root_span(),
            level_step: default_level_step(),
            shrink: default_shrink(),
        }
    }
}

fn default_root_span() -> f64 {
    400.0
}

fn default_level_step() -> f64 {
    80.0
}

fn default_shrink() -> f64 {
    0.8
}

/// Weights for the heuristic byte model: `bytes = nodes * node_bytes +
/// edges * edge_bytes`. A modeling aid, not a real measurement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrieMemoryConfig {
    #[serde(default = "default_node_bytes")]
    pub node_bytes: usize,
    #[serde(default = "default_edge_bytes")]
    pub edge_bytes: usize,
}

impl Default for TrieMemoryConfig {
    fn default() -> Self {
        Self {
            node_bytes: default_node_bytes(),
            edge_bytes: default_edge_bytes(),
        }
    }
}

fn default_node_bytes() -> usize {
    100
}

fn default_edge_bytes() -> usize {
    50
}
