//! 集成测试公共工具

use std::collections::{HashMap, HashSet};
use tracing_subscriber::EnvFilter;

/// 初始化测试日志（`RUST_LOG=wdgraph=trace cargo test` 查看图操作日志）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn labels(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(dead_code)]
pub fn weights(items: &[(&str, u64)]) -> HashMap<String, u64> {
    items.iter().map(|(s, w)| (s.to_string(), *w)).collect()
}
