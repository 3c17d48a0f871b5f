//! 网络拓扑模块
//!
//! 此模块包含拓扑描述的核心组件：节点、链路、地址与拓扑图。
//! 拓扑只是声明式描述，真正的进程与命名空间由仿真引擎创建。

// 子模块声明
mod addr;
mod controller;
mod id;
mod link;
mod node;
mod topology;

// 重新导出公共接口
pub use addr::{AddrParseError, HostAddr, MacAddr, host_ip, host_mac};
pub use controller::ControllerRef;
pub use id::{LinkId, NodeId};
pub use link::Link;
pub use node::{Host, Node, OpenFlowVersion, Switch};
pub use topology::{Topology, TopologyError};
