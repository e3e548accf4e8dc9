//! 图配置

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// 预分配的顶点容量
    pub vertex_capacity: usize,
    /// 每次修改后是否校验表示不变量（开销与整图规模成正比，默认关闭；仅 debug 构建会断言失败）
    pub check_invariants: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 0,
            check_invariants: false,
        }
    }
}

impl GraphConfig {
    /// 设置预分配的顶点容量
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// 开启或关闭修改后的不变量校验
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }
}
