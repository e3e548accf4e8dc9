//! 带权有向图
//!
//! 邻接表表示：顶点按标签存放在插入有序的键控映射中，每个顶点持有自己的出边映射。
//! 键控容器保证标签唯一，`NonZeroU64` 权重保证存储的边权恒为正。

use super::config::GraphConfig;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, error, trace, warn};

/// 带权有向图
///
/// 图独占所有顶点；所有查询返回副本或不可变引用。
/// 非线程安全，并发场景请使用 [`SharedGraph`](super::SharedGraph)。
#[derive(Debug, Clone)]
pub struct WeightedDirectedGraph<L> {
    /// 顶点：标签 -> 顶点
    vertices: IndexMap<L, Vertex<L>>,
    /// 配置
    config: GraphConfig,
}

impl<L> WeightedDirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 创建预分配顶点容量的空图
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::default().with_vertex_capacity(capacity))
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::with_capacity(config.vertex_capacity),
            config,
        }
    }

    /// 由顶点列表构建图
    ///
    /// 标签重复返回 [`Error::DuplicateVertex`]，
    /// 出边指向不存在的顶点返回 [`Error::InvariantViolation`]。
    pub fn from_vertices<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex<L>>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            match graph.vertices.entry(vertex.label().clone()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateVertex(format!("{:?}", entry.key())));
                }
                Entry::Vacant(entry) => {
                    entry.insert(vertex);
                }
            }
        }
        graph.validate()?;
        Ok(graph)
    }

    /// 获取配置
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 顶点已存在时不做修改并返回 `false`。
    pub fn add(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            trace!(label = ?label, "顶点已存在");
            return false;
        }

        debug!(label = ?label, "添加顶点");
        self.vertices.insert(label.clone(), Vertex::new(label));
        self.check_rep();
        true
    }

    /// 删除顶点，并删除所有指向它的边
    ///
    /// 顶点不存在时返回 `false`。
    pub fn remove<Q>(&mut self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.vertices.contains_key(label) {
            return false;
        }

        // 先清理入边，再丢弃顶点
        let detached = self
            .vertices
            .values_mut()
            .filter_map(|vertex| vertex.remove_target(label))
            .count();

        if let Some(vertex) = self.vertices.shift_remove(label) {
            debug!(
                label = ?vertex.label(),
                outgoing = vertex.target_count(),
                incoming = detached,
                "删除顶点"
            );
        }
        self.check_rep();
        true
    }

    /// 所有顶点标签
    pub fn vertices(&self) -> HashSet<L> {
        self.vertices.keys().cloned().collect()
    }

    /// 按插入顺序遍历顶点
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<L>> + '_ {
        self.vertices.values()
    }

    /// 获取顶点（只读）
    pub fn vertex<Q>(&self, label: &Q) -> Option<&Vertex<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.get(label)
    }

    /// 是否包含顶点
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.contains_key(label)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 设置边 `source -> target` 的权重，返回原权重（无边时为 0）
    ///
    /// - `weight > 0`：按需创建两端顶点后设置权重
    /// - `weight == 0`：删除已有的边，不创建顶点
    /// - `weight < 0`：无效输入，不做修改并返回 0
    ///
    /// 需要拒绝负权重时使用 [`try_set`](Self::try_set)。
    pub fn set(&mut self, source: L, target: L, weight: i64) -> u64 {
        match self.try_set(source, target, weight) {
            Ok(previous) => previous,
            Err(err) => {
                warn!(%err, "忽略无效的边设置");
                0
            }
        }
    }

    /// 设置边权重，负权重返回 [`Error::InvalidWeight`] 且不做修改
    pub fn try_set(&mut self, source: L, target: L, weight: i64) -> Result<u64> {
        if weight < 0 {
            return Err(Error::InvalidWeight(weight));
        }

        let previous = if weight > 0 {
            let index = self.ensure_vertex(&source);
            self.ensure_vertex(&target);
            trace!(source = ?source, target = ?target, weight, "设置边");
            self.vertices[index].set_target(target, weight as u64)
        } else {
            let previous = self
                .vertices
                .get_mut(&source)
                .and_then(|vertex| vertex.remove_target(&target))
                .unwrap_or(0);
            if previous > 0 {
                trace!(source = ?source, target = ?target, previous, "删除边");
            }
            previous
        };

        self.check_rep();
        Ok(previous)
    }

    /// 所有指向 `target` 的边：源标签 -> 权重
    pub fn sources<Q>(&self, target: &Q) -> HashMap<L, u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices
            .values()
            .filter_map(|vertex| {
                vertex
                    .get(target)
                    .map(|weight| (vertex.label().clone(), weight))
            })
            .collect()
    }

    /// `source` 的所有出边：目标标签 -> 权重
    pub fn targets<Q>(&self, source: &Q) -> HashMap<L, u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices
            .get(source)
            .map(Vertex::targets)
            .unwrap_or_default()
    }

    /// 获取边 `source -> target` 的权重
    ///
    /// 源顶点不存在或没有这条边时返回 `None`；需要区分两种情况时使用
    /// [`require_weight`](Self::require_weight)。
    pub fn weight<Q>(&self, source: &Q, target: &Q) -> Option<u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.get(source)?.get(target)
    }

    /// 获取边 `source -> target` 的权重
    ///
    /// - 源顶点不存在：返回 [`Error::VertexNotFound`]
    /// - 源顶点存在但没有这条边：返回 [`Error::EdgeNotFound`]
    pub fn require_weight<Q>(&self, source: &Q, target: &Q) -> Result<u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.vertices
            .get(source)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", source)))?
            .weight(target)
    }

    /// 是否存在边 `source -> target`
    ///
    /// 任一端顶点不存在时返回 `false`。
    pub fn contains_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.weight(source, target).is_some()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::target_count).sum()
    }

    /// 获取顶点的出度
    pub fn out_degree<Q>(&self, label: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices
            .get(label)
            .map(Vertex::target_count)
            .unwrap_or(0)
    }

    /// 获取顶点的入度
    pub fn in_degree<Q>(&self, label: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices
            .values()
            .filter(|vertex| vertex.has_target(label))
            .count()
    }

    // ==================== 不变量 ====================

    /// 校验表示不变量：每条边的目标顶点都在图中
    ///
    /// 映射键总是取自顶点自身的标签（`add`、`set`、`from_vertices` 均如此），
    /// 因此键与标签一致由构造保证，这里不再检查。
    pub fn validate(&self) -> Result<()> {
        for (key, vertex) in &self.vertices {
            for (target, _) in vertex.iter_targets() {
                if !self.vertices.contains_key(target) {
                    return Err(Error::InvariantViolation(format!(
                        "边 {:?} -> {:?} 指向不存在的顶点",
                        key, target
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_rep(&self) {
        if !self.config.check_invariants {
            return;
        }
        let result = self.validate();
        if let Err(err) = &result {
            error!(%err, "图表示不变量被破坏");
        }
        debug_assert!(result.is_ok(), "{:?}", result);
    }

    /// 确保顶点存在，返回其在映射中的位置
    fn ensure_vertex(&mut self, label: &L) -> usize {
        match self.vertices.entry(label.clone()) {
            Entry::Occupied(entry) => entry.index(),
            Entry::Vacant(entry) => {
                debug!(label = ?label, "隐式创建顶点");
                let index = entry.index();
                entry.insert(Vertex::new(label.clone()));
                index
            }
        }
    }

    // ==================== 持久化 ====================

    /// 序列化为字节
    pub fn to_bytes(&self) -> Result<Vec<u8>>
    where
        L: Serialize,
    {
        Ok(bincode::serialize(self)?)
    }

    /// 从字节反序列化，并重新校验表示不变量
    pub fn from_bytes(bytes: &[u8]) -> Result<Self>
    where
        L: DeserializeOwned,
    {
        let vertices: Vec<Vertex<L>> = bincode::deserialize(bytes)?;
        Self::from_vertices(vertices)
    }
}

impl<L> Default for WeightedDirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> PartialEq for WeightedDirectedGraph<L>
where
    L: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<L> Eq for WeightedDirectedGraph<L> where L: Eq + Hash {}

impl<L> fmt::Display for WeightedDirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph contains {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

/// 序列化为按插入顺序排列的顶点列表
impl<L> Serialize for WeightedDirectedGraph<L>
where
    L: Serialize + Eq + Hash,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.vertices.values())
    }
}

impl<'de, L> Deserialize<'de> for WeightedDirectedGraph<L>
where
    L: Deserialize<'de> + Eq + Hash + Clone + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let vertices = Vec::<Vertex<L>>::deserialize(deserializer)?;
        Self::from_vertices(vertices).map_err(de::Error::custom)
    }
}
