//! 网络拓扑管理
//!
//! 定义声明式拓扑：节点表、链路表与邻接关系。构建拓扑没有副作用，
//! 进程与命名空间由仿真引擎在启动时创建、停止时销毁。

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, trace};

use super::addr::{HostAddr, MacAddr};
use super::id::{LinkId, NodeId};
use super::link::Link;
use super::node::{Host, Node, OpenFlowVersion, Switch};

/// 拓扑构建/校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("duplicate node name: {0}")]
    DuplicateName(String),
    #[error("duplicate link between {a:?} and {b:?}")]
    DuplicateLink { a: NodeId, b: NodeId },
    #[error("link endpoints must differ: {0:?}")]
    SelfLink(NodeId),
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
    #[error("duplicate host address: {0}")]
    DuplicateAddr(HostAddr),
    #[error("duplicate MAC address: {0}")]
    DuplicateMac(MacAddr),
}

/// 网络拓扑
#[derive(Debug, Default)]
pub struct Topology {
    nodes: Vec<Node>,
    links: Vec<Link>,
    edges: HashSet<(NodeId, NodeId)>,
}

impl Topology {
    /// 添加主机节点
    pub fn add_host(
        &mut self,
        name: impl Into<String>,
        mac: MacAddr,
        addr: HostAddr,
        cpu_frac: f64,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        debug!(node = %name, ?id, %mac, %addr, cpu_frac, "添加主机节点");
        self.nodes.push(Node::Host(Host {
            id,
            name,
            mac,
            addr,
            cpu_frac,
        }));
        id
    }

    /// 添加交换机节点
    pub fn add_switch(&mut self, name: impl Into<String>, protocol: OpenFlowVersion) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        debug!(node = %name, ?id, protocol = protocol.as_str(), "添加交换机节点");
        self.nodes.push(Node::Switch(Switch { id, name, protocol }));
        id
    }

    /// 连接两个节点（创建无向链路）
    pub fn link(&mut self, a: NodeId, b: NodeId) -> Result<LinkId, TopologyError> {
        if a == b {
            return Err(TopologyError::SelfLink(a));
        }
        for n in [a, b] {
            if n.index() >= self.nodes.len() {
                return Err(TopologyError::UnknownNode(n));
            }
        }
        if !self.edges.insert(Self::edge_key(a, b)) {
            return Err(TopologyError::DuplicateLink { a, b });
        }
        let id = LinkId(self.links.len());
        trace!(?a, ?b, ?id, "创建链路");
        self.links.push(Link::new(a, b));
        Ok(id)
    }

    fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// 按名称查找节点
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name() == name).map(Node::id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// 主机节点，按加入顺序
    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.nodes.iter().filter_map(Node::as_host)
    }

    /// 交换机节点，按加入顺序
    pub fn switches(&self) -> impl Iterator<Item = &Switch> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Switch(s) => Some(s),
            Node::Host(_) => None,
        })
    }

    pub fn host_count(&self) -> usize {
        self.hosts().count()
    }

    pub fn switch_count(&self) -> usize {
        self.switches().count()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// 返回节点的邻居集合（按链路表顺序）
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.links.iter().filter_map(|l| l.peer(id)).collect()
    }

    /// 校验拓扑：节点名称、主机 IP 与 MAC 均不重复
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut names = HashSet::new();
        let mut addrs = HashSet::new();
        let mut macs = HashSet::new();
        for node in &self.nodes {
            if !names.insert(node.name()) {
                return Err(TopologyError::DuplicateName(node.name().to_string()));
            }
            if let Node::Host(host) = node {
                if !addrs.insert(host.addr) {
                    return Err(TopologyError::DuplicateAddr(host.addr));
                }
                if !macs.insert(host.mac) {
                    return Err(TopologyError::DuplicateMac(host.mac));
                }
            }
        }
        Ok(())
    }
}
