//! 错误类型
//!
//! Graph mutations report expected caller-input problems through `bool` /
//! `Option` results. The enums here carry the detail when a caller asks for it
//! (`Graph::try_add_edge_cost`) and cover configuration and logger start-up.

use thiserror::Error;

use crate::graph::Key;

/// Graph-level result type
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(Key),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading/saving configuration or starting the logger
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("日志初始化错误: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
