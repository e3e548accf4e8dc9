//! 图核心模块
//!
//! 定义顶点、带权有向图及其共享句柄

mod config;
mod graph;
mod shared;
mod vertex;

pub use config::GraphConfig;
pub use graph::WeightedDirectedGraph;
pub use shared::SharedGraph;
pub use vertex::Vertex;
