//! wdgraph - 带权有向图抽象数据类型
//!
//! 以泛型标签标识顶点的可变带权有向图，支持：
//! - 顶点的插入与删除（删除时级联清理入边）
//! - 带正整数权重的有向边设置、更新与清除
//! - 入边 / 出边查询，返回独立副本
//! - 单锁保护的共享句柄与二进制快照

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{GraphConfig, SharedGraph, Vertex, WeightedDirectedGraph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
