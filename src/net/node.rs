//! 节点类型
//!
//! 定义拓扑中的节点：带静态地址与 CPU 配额的主机，以及连接远程
//! 控制器的交换机。

use super::addr::{HostAddr, MacAddr};
use super::id::NodeId;

/// OpenFlow 协议版本（交换机与控制器之间的协议）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenFlowVersion {
    #[default]
    OpenFlow13,
}

impl OpenFlowVersion {
    /// 引擎侧使用的协议字符串
    pub fn as_str(self) -> &'static str {
        match self {
            OpenFlowVersion::OpenFlow13 => "OpenFlow13",
        }
    }
}

/// 主机节点
#[derive(Debug, Clone)]
pub struct Host {
    pub id: NodeId,
    pub name: String,
    pub mac: MacAddr,
    pub addr: HostAddr,
    /// 单核 CPU 配额（比例）
    pub cpu_frac: f64,
}

/// 交换机节点
#[derive(Debug, Clone)]
pub struct Switch {
    pub id: NodeId,
    pub name: String,
    pub protocol: OpenFlowVersion,
}

/// 拓扑节点
#[derive(Debug, Clone)]
pub enum Node {
    Host(Host),
    Switch(Switch),
}

impl Node {
    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        match self {
            Node::Host(h) => h.id,
            Node::Switch(s) => s.id,
        }
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        match self {
            Node::Host(h) => &h.name,
            Node::Switch(s) => &s.name,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Node::Host(_))
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Node::Switch(_))
    }

    pub fn as_host(&self) -> Option<&Host> {
        match self {
            Node::Host(h) => Some(h),
            Node::Switch(_) => None,
        }
    }
}
