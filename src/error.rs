// 错误只有一种需要抛出：对空环做必须有元素的操作
// 找不到值不是错误，用Option/bool表达即可
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("collection is empty")]
    EmptyCollection,
}
