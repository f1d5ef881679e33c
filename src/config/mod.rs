//! 配置模块
//!
//! TOML-backed settings for graph construction and logging. Every field has a
//! default, so a partial file (or an empty one) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::ConfigResult;

/// Graph construction settings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GraphConfig {
    /// Mirror every added edge in the reverse direction
    pub undirected: bool,
    /// Pre-sized capacity of the vertex and adjacency tables
    pub initial_capacity: usize,
}

/// Logger settings consumed by `utils::logging::init`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// flexi_logger level spec, e.g. `"info"` or `"adjgraph=debug"`
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// Log to stderr instead of rotated files
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "adjgraph".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            to_stderr: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
