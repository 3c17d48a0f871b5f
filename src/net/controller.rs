//! 远程控制器引用
//!
//! 交换机通过 OpenFlow 连接的外部决策端点。对本仓库而言它只是
//! 一个地址，流表编程协议完全在引擎与控制器之间进行。

use std::net::{Ipv4Addr, SocketAddrV4};

/// 远程控制器端点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRef {
    pub name: String,
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl ControllerRef {
    /// 创建新控制器引用
    pub fn new(name: impl Into<String>, ip: Ipv4Addr, port: u16) -> Self {
        Self {
            name: name.into(),
            ip,
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip, self.port)
    }
}

impl Default for ControllerRef {
    fn default() -> Self {
        Self::new("c0", Ipv4Addr::new(192, 168, 0, 101), 6653)
    }
}
