//! 图容器模块
//!
//! Vertex/edge storage with forward and reverse adjacency indices, traversal,
//! structural filtering and the pluggable path-finding entry points.

pub mod container;
pub mod edge;
pub mod key;
pub mod path;
mod tables;
pub mod vertex;

// 重新导出图容器相关类型
pub use container::{Graph, DEFAULT_EDGE_COST};
pub use edge::Edge;
pub use key::{Key, KeyGenerator};
pub use path::{Path, PathFinder, Paths, PathsFinder};
pub use vertex::Vertex;
