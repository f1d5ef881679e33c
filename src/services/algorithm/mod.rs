//! 算法模块
//!
//! 包含图路径搜索算法实现

pub mod dijkstra;
pub mod path_heap;

// 重新导出常用算法结构体
pub use dijkstra::{dijkstra, Dijkstra};
pub use path_heap::{PathHeap, SearchPath};
