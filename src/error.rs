//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效的权重: {0}（权重不能为负）")]
    InvalidWeight(i64),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点重复: {0}")]
    DuplicateVertex(String),

    #[error("表示不变量被破坏: {0}")]
    InvariantViolation(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
