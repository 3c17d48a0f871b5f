//! 地址类型
//!
//! 定义主机的 MAC 地址与带前缀长度的 IPv4 地址，以及主机编号到
//! 静态地址的映射。

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// 地址解析错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddrParseError {
    #[error("invalid MAC address: {0}")]
    Mac(String),
    #[error("invalid host address: {0}")]
    Host(String),
}

/// MAC 地址（6 字节）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for slot in bytes.iter_mut() {
            let part = parts.next().ok_or_else(|| AddrParseError::Mac(s.to_string()))?;
            *slot =
                u8::from_str_radix(part, 16).map_err(|_| AddrParseError::Mac(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(AddrParseError::Mac(s.to_string()));
        }
        Ok(MacAddr(bytes))
    }
}

/// 带前缀长度的 IPv4 地址，显示为 `a.b.c.d/len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostAddr {
    pub ip: Ipv4Addr,
    pub prefix_len: u8,
}

impl HostAddr {
    /// 创建新地址
    pub fn new(ip: Ipv4Addr, prefix_len: u8) -> Self {
        Self { ip, prefix_len }
    }
}

impl fmt::Display for HostAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_len)
    }
}

impl FromStr for HostAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ip, len) = s
            .split_once('/')
            .ok_or_else(|| AddrParseError::Host(s.to_string()))?;
        let ip = ip
            .parse::<Ipv4Addr>()
            .map_err(|_| AddrParseError::Host(s.to_string()))?;
        let prefix_len = len
            .parse::<u8>()
            .map_err(|_| AddrParseError::Host(s.to_string()))?;
        if prefix_len > 32 {
            return Err(AddrParseError::Host(s.to_string()));
        }
        Ok(HostAddr { ip, prefix_len })
    }
}

/// 主机编号到 IPv4 地址的映射：n -> 10.0.0.n
pub fn host_ip(n: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, n)
}

/// 主机编号到 MAC 地址的映射。
///
/// 原始拓扑把十进制编号原样写进最后一个八位组（h10 是 `…:00:10`
/// 而不是 `…:00:0a`），这里保持同样的编码。
pub fn host_mac(n: u8) -> MacAddr {
    debug_assert!(n < 100, "decimal MAC encoding only covers two digits");
    let last = ((n / 10) << 4) | (n % 10);
    MacAddr([0, 0, 0, 0, 0, last])
}
