use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::profile::{AttackProfile, FloodMode, SpoofSource, Target};

/// JSON override of the built-in attack sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub cooldown_secs: Option<u64>,
    #[serde(default)]
    pub burst_timeout_secs: Option<u64>,
    #[serde(default)]
    pub attacks: Vec<AttackProfile>,
}

impl ScenarioSpec {
    /// Attack list to run: the file's list, or the built-in sequence when
    /// the file does not name any.
    pub fn attacks(&self) -> Vec<AttackProfile> {
        if self.attacks.is_empty() {
            default_attacks()
        } else {
            self.attacks.clone()
        }
    }
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self {
            schema_version: 1,
            cooldown_secs: None,
            burst_timeout_secs: None,
            attacks: Vec::new(),
        }
    }
}

/// The built-in four-burst sequence: ICMP flood, UDP flood, TCP-SYN flood,
/// LAND attack, in that order.
pub fn default_attacks() -> Vec<AttackProfile> {
    vec![
        AttackProfile {
            name: "ICMP (Ping) Flood".to_string(),
            mode: FloodMode::Icmp,
            data_bytes: 120,
            win_bytes: 64,
            dest_port: Some(80),
            spoof: SpoofSource::Random,
            target: Target::RandomHost,
        },
        AttackProfile {
            name: "UDP Flood".to_string(),
            mode: FloodMode::Udp,
            data_bytes: 120,
            win_bytes: 64,
            dest_port: None,
            spoof: SpoofSource::Random,
            target: Target::RandomHost,
        },
        AttackProfile {
            name: "TCP-SYN Flood".to_string(),
            mode: FloodMode::Syn,
            data_bytes: 120,
            win_bytes: 64,
            dest_port: Some(80),
            spoof: SpoofSource::Random,
            target: Target::Fixed {
                ip: Ipv4Addr::new(10, 0, 0, 1),
            },
        },
        AttackProfile {
            name: "LAND Attack".to_string(),
            mode: FloodMode::Icmp,
            data_bytes: 120,
            win_bytes: 64,
            dest_port: None,
            spoof: SpoofSource::Destination,
            target: Target::RandomHost,
        },
    ]
}
