//! 顶点定义
//!
//! 邻接表表示中的单个顶点：不可变标签 + 出边映射（目标标签 -> 正权重）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroU64;

/// 顶点
///
/// 出边权重以 `NonZeroU64` 存储，权重为 0 表示"无边"，不会出现在映射中。
/// 自环（目标即自身）是合法的普通边。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "L: Serialize + Eq + Hash",
    deserialize = "L: Deserialize<'de> + Eq + Hash"
))]
pub struct Vertex<L> {
    /// 顶点标签
    label: L,
    /// 出边：目标标签 -> 权重
    targets: HashMap<L, NonZeroU64>,
}

impl<L> Vertex<L>
where
    L: Eq + Hash + Clone,
{
    /// 创建新顶点（无出边）
    pub fn new(label: L) -> Self {
        Self {
            label,
            targets: HashMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &L {
        &self.label
    }

    /// 设置到 `target` 的出边，返回原权重（无边时为 0）
    ///
    /// `weight` 为 0 时删除该边。
    pub fn set_target(&mut self, target: L, weight: u64) -> u64 {
        let previous = match NonZeroU64::new(weight) {
            Some(weight) => self.targets.insert(target, weight),
            None => self.targets.remove(&target),
        };
        previous.map_or(0, NonZeroU64::get)
    }

    /// 删除到 `target` 的出边，返回原权重
    pub fn remove_target<Q>(&mut self, target: &Q) -> Option<u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.targets.remove(target).map(NonZeroU64::get)
    }

    /// 是否存在到 `target` 的出边
    pub fn has_target<Q>(&self, target: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.targets.contains_key(target)
    }

    /// 获取到 `target` 的边权重，不存在时返回 `None`
    pub fn get<Q>(&self, target: &Q) -> Option<u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.targets.get(target).map(|w| w.get())
    }

    /// 获取到 `target` 的边权重
    ///
    /// 调用方应先用 [`Vertex::has_target`] 确认边存在，否则返回
    /// [`Error::EdgeNotFound`]。
    pub fn weight<Q>(&self, target: &Q) -> Result<u64>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get(target)
            .ok_or_else(|| Error::EdgeNotFound(format!("{:?}", target)))
    }

    /// 出边数量
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// 所有出边的独立副本
    pub fn targets(&self) -> HashMap<L, u64> {
        self.iter_targets()
            .map(|(label, weight)| (label.clone(), weight))
            .collect()
    }

    /// 遍历出边（只读）
    pub fn iter_targets(&self) -> impl Iterator<Item = (&L, u64)> + '_ {
        self.targets.iter().map(|(label, weight)| (label, weight.get()))
    }
}

impl<L> PartialEq for Vertex<L>
where
    L: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.targets == other.targets
    }
}

impl<L> Eq for Vertex<L> where L: Eq + Hash {}

impl<L> fmt::Display for Vertex<L>
where
    L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vertex = {} has {} targets",
            self.label,
            self.targets.len()
        )
    }
}
