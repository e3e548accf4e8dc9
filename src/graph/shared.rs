//! 共享图句柄
//!
//! 整个图由一把读写锁保护；`remove` 等操作会触及所有顶点的出边，
//! 必须在独占访问下整体完成。

use super::graph::WeightedDirectedGraph;
use crate::error::Result;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// 线程间共享的带权有向图
pub struct SharedGraph<L> {
    inner: Arc<RwLock<WeightedDirectedGraph<L>>>,
}

impl<L> SharedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// 创建空的共享图
    pub fn new() -> Self {
        Self::from_graph(WeightedDirectedGraph::new())
    }

    /// 包装已有的图
    pub fn from_graph(graph: WeightedDirectedGraph<L>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 在读锁下执行只读操作
    pub fn read<R>(&self, f: impl FnOnce(&WeightedDirectedGraph<L>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// 在写锁下执行复合修改
    pub fn write<R>(&self, f: impl FnOnce(&mut WeightedDirectedGraph<L>) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// 添加顶点
    pub fn add(&self, label: L) -> bool {
        self.inner.write().add(label)
    }

    /// 设置边权重，负权重不做修改并返回 0
    pub fn set(&self, source: L, target: L, weight: i64) -> u64 {
        self.inner.write().set(source, target, weight)
    }

    /// 设置边权重，负权重返回错误
    pub fn try_set(&self, source: L, target: L, weight: i64) -> Result<u64> {
        self.inner.write().try_set(source, target, weight)
    }

    /// 删除顶点及其入边
    pub fn remove<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(label)
    }

    /// 所有顶点标签
    pub fn vertices(&self) -> HashSet<L> {
        self.inner.read().vertices()
    }

    /// 所有指向 `target` 的边
    pub fn sources<Q>(&self, target: &Q) -> HashMap<L, u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().sources(target)
    }

    /// `source` 的所有出边
    pub fn targets<Q>(&self, source: &Q) -> HashMap<L, u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().targets(source)
    }

    /// 当前图的快照副本
    pub fn snapshot(&self) -> WeightedDirectedGraph<L> {
        self.inner.read().clone()
    }

    /// 取回内部的图；仍有其他句柄时原样返回
    pub fn try_unwrap(self) -> std::result::Result<WeightedDirectedGraph<L>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<L> Clone for SharedGraph<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L> fmt::Debug for SharedGraph<L>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedGraph")
            .field("graph", &*self.inner.read())
            .finish()
    }
}

impl<L> Default for SharedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> From<WeightedDirectedGraph<L>> for SharedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    fn from(graph: WeightedDirectedGraph<L>) -> Self {
        Self::from_graph(graph)
    }
}
