use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ignore::DEFAULT_FALLBACK_PATTERNS;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignore: IgnoreConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Name of the ignore file looked up at the render root
    pub ignore_file: String,
    /// Patterns used when no ignore file is found (or it yields no patterns)
    pub fallback_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// List sibling subtrees concurrently
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: IgnoreConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            ignore_file: ".gitignore".to_string(),
            fallback_patterns: DEFAULT_FALLBACK_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { parallel: false }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location if none is given. A missing file at the default location
    /// is not an error; an explicit path must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("project-tree").join("config.toml"))
    }
}
