//! 链路类型
//!
//! 定义无向链路。引擎默认启用 TC 整形但不设参数，链路上除端点外
//! 没有属性。

use super::id::NodeId;

/// 无向链路
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
}

impl Link {
    /// 创建新链路
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// 链路是否连接指定节点
    pub fn touches(&self, n: NodeId) -> bool {
        self.a == n || self.b == n
    }

    /// 给定一端返回另一端
    pub fn peer(&self, n: NodeId) -> Option<NodeId> {
        if self.a == n {
            Some(self.b)
        } else if self.b == n {
            Some(self.a)
        } else {
            None
        }
    }
}
