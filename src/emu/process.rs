//! 进程引擎
//!
//! 把每条主机命令包装成本地进程执行。前缀模板（例如
//! `ip netns exec {host}`）把命令送进对应主机的执行环境；
//! 命名空间与虚拟交换机由外部仿真引擎预先创建。

use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::engine::{EmuError, Engine, ExecReport, ExecStats, RunningNet};
use crate::net::{ControllerRef, Topology};

/// 默认的每主机命令前缀
pub const DEFAULT_EXEC_PREFIX: &str = "ip netns exec {host}";

/// 进程引擎：通过 shell 把命令交给已就绪的仿真网络
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    /// 命令前缀模板，`{host}` 替换为主机名
    pub exec_prefix: String,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self {
            exec_prefix: DEFAULT_EXEC_PREFIX.to_string(),
        }
    }
}

impl Engine for ProcessEngine {
    fn start(
        &mut self,
        topo: &Topology,
        controller: &ControllerRef,
    ) -> Result<Box<dyn RunningNet>, EmuError> {
        topo.validate().map_err(|e| EmuError::Start(e.to_string()))?;
        let hosts: Vec<String> = topo.hosts().map(|h| h.name.clone()).collect();
        info!(
            switches = topo.switch_count(),
            hosts = hosts.len(),
            links = topo.link_count(),
            controller = %controller.socket_addr(),
            "🚀 接管仿真网络"
        );
        Ok(Box::new(ProcessNet {
            prefix: self.exec_prefix.clone(),
            hosts,
            stats: ExecStats::default(),
            stopped: false,
        }))
    }
}

/// 运行中的网络：主机命令经由前缀模板进入各自的执行环境
#[derive(Debug)]
pub struct ProcessNet {
    prefix: String,
    hosts: Vec<String>,
    stats: ExecStats,
    stopped: bool,
}

impl ProcessNet {
    fn check_host(&self, host: &str) -> Result<(), EmuError> {
        if self.hosts.iter().any(|h| h == host) {
            Ok(())
        } else {
            Err(EmuError::UnknownHost(host.to_string()))
        }
    }

    fn command_line(&self, host: &str, command: &str) -> String {
        let prefix = self.prefix.replace("{host}", host);
        if prefix.is_empty() {
            command.to_string()
        } else {
            format!("{prefix} {command}")
        }
    }
}

impl RunningNet for ProcessNet {
    fn host_names(&self) -> Vec<String> {
        self.hosts.clone()
    }

    fn exec(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError> {
        self.check_host(host)?;
        let line = self.command_line(host, command);
        debug!(host, command = %line, "下发命令（不等待完成）");
        self.stats.issued += 1;
        match Command::new("sh")
            .arg("-c")
            .arg(&line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_child) => Ok(ExecReport {
                host: host.to_string(),
                command: line,
                exit_code: None,
            }),
            Err(source) => {
                self.stats.failed += 1;
                Err(EmuError::Spawn {
                    host: host.to_string(),
                    source,
                })
            }
        }
    }

    fn run(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError> {
        self.check_host(host)?;
        let line = self.command_line(host, command);
        debug!(host, command = %line, "下发命令并等待退出");
        self.stats.issued += 1;
        let status = Command::new("sh").arg("-c").arg(&line).status();
        let status = match status {
            Ok(status) => status,
            Err(source) => {
                self.stats.failed += 1;
                return Err(EmuError::Spawn {
                    host: host.to_string(),
                    source,
                });
            }
        };
        if !status.success() {
            self.stats.failed += 1;
        }
        Ok(ExecReport {
            host: host.to_string(),
            command: line,
            exit_code: status.code(),
        })
    }

    fn stats(&self) -> ExecStats {
        self.stats
    }

    fn stop(&mut self) -> Result<(), EmuError> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;
        info!(
            issued = self.stats.issued,
            failed = self.stats.failed,
            "⏹️  停止仿真网络"
        );
        Ok(())
    }
}
