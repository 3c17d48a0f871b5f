//! 攻击编排
//!
//! 在已启动的仿真网络上按固定顺序发起洪泛攻击：随机挑一台源主机、
//! 按规则选目的地址、下发一条 hping3 命令，然后等待固定冷却时间。
//! 命令都是发射后不管，失败只记日志，序列照常推进。

use std::net::Ipv4Addr;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use super::profile::{AttackProfile, Target};
use super::scenario::default_attacks;
use crate::emu::{EmuError, RunningNet};
use crate::net::host_ip;

/// 随机目的地址：10.0.0.1 ..= 10.0.0.host_count
pub fn random_host_ip<R: Rng + ?Sized>(rng: &mut R, host_count: u8) -> Ipv4Addr {
    host_ip(rng.gen_range(1..=host_count))
}

/// 攻击编排器
pub struct Orchestrator {
    pub attacks: Vec<AttackProfile>,
    /// 交给 hping3 外层 timeout 的洪泛时长上限
    pub burst_timeout: Duration,
    /// 两次攻击之间的冷却时间。洪泛命令自身带 20 秒 timeout，
    /// 编排器不验证它是否真的结束，只按冷却时间推进。
    pub cooldown: Duration,
    /// 目的地址池大小（10.0.0.1 ..= 10.0.0.N）
    pub host_count: u8,
    /// 第一台主机上静态文件服务的工作目录
    pub webserver_dir: String,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self {
            attacks: default_attacks(),
            burst_timeout: Duration::from_secs(20),
            cooldown: Duration::from_secs(100),
            host_count: 18,
            webserver_dir: "/home/mininet/webserver".to_string(),
        }
    }
}

impl Orchestrator {
    /// 运行完整的攻击序列，结束后停止网络。
    pub fn run<R: Rng + ?Sized>(
        &self,
        net: &mut dyn RunningNet,
        rng: &mut R,
    ) -> Result<(), EmuError> {
        let hosts = net.host_names();
        let Some(web_host) = hosts.first().cloned() else {
            warn!("拓扑中没有主机，直接停止");
            return net.stop();
        };

        // 在第一台主机上起一个静态文件服务，作为 80 端口的攻击面
        let serve = format!(
            "cd {} && python -m SimpleHTTPServer 80 &",
            self.webserver_dir
        );
        if let Err(err) = net.exec_bg(&web_host, &serve) {
            warn!(%err, host = %web_host, "静态文件服务启动失败，继续执行");
        }

        for profile in &self.attacks {
            let src = hosts[rng.gen_range(0..hosts.len())].clone();
            let dst = match profile.target {
                Target::RandomHost => random_host_ip(rng, self.host_count),
                Target::Fixed { ip } => ip,
            };

            banner(&profile.name);
            info!(src = %src, dst = %dst, attack = %profile.name, "💥 发起洪泛攻击");

            let command = profile.command(dst, self.burst_timeout);
            match net.exec(&src, &command) {
                Ok(report) => {
                    if matches!(report.exit_code, Some(code) if code != 0) {
                        warn!(code = ?report.exit_code, host = %src, "洪泛命令返回非零状态");
                    }
                }
                Err(err) => warn!(%err, host = %src, "攻击命令下发失败，继续执行"),
            }

            thread::sleep(self.cooldown);
        }

        println!(
            "--------------------------------------------------------------------------------"
        );
        info!("✅ 攻击序列完成，停止网络");
        net.stop()
    }
}

fn banner(name: &str) {
    println!(
        "--------------------------------------------------------------------------------"
    );
    println!("                 Simulating {name}");
    println!(
        "--------------------------------------------------------------------------------"
    );
}
