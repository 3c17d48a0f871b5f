//! Dry-run engine: records the command plan instead of executing it.

use tracing::info;

use super::engine::{EmuError, Engine, ExecReport, ExecStats, RunningNet};
use crate::net::{ControllerRef, Topology};

/// One recorded command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub host: String,
    pub command: String,
    pub background: bool,
}

/// Engine that never launches anything: the resulting net records and
/// echoes every command it is handed.
#[derive(Debug, Default)]
pub struct PlanEngine;

/// Recording counterpart of a live network.
#[derive(Debug, Default)]
pub struct PlanNet {
    hosts: Vec<String>,
    echo: bool,
    stats: ExecStats,
    stopped: bool,
    pub entries: Vec<PlanEntry>,
}

impl PlanNet {
    pub fn new(hosts: Vec<String>) -> Self {
        Self {
            hosts,
            ..Self::default()
        }
    }

    /// Echo each command to stdout as it is recorded (`--dry-run` output).
    pub fn with_echo(hosts: Vec<String>) -> Self {
        Self {
            echo: true,
            ..Self::new(hosts)
        }
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    fn record(
        &mut self,
        host: &str,
        command: &str,
        background: bool,
    ) -> Result<ExecReport, EmuError> {
        if !self.hosts.iter().any(|h| h == host) {
            self.stats.failed += 1;
            return Err(EmuError::UnknownHost(host.to_string()));
        }
        self.stats.issued += 1;
        if self.echo {
            println!("[{host}] {command}");
        }
        self.entries.push(PlanEntry {
            host: host.to_string(),
            command: command.to_string(),
            background,
        });
        Ok(ExecReport {
            host: host.to_string(),
            command: command.to_string(),
            exit_code: Some(0),
        })
    }
}

impl Engine for PlanEngine {
    fn start(
        &mut self,
        topo: &Topology,
        controller: &ControllerRef,
    ) -> Result<Box<dyn RunningNet>, EmuError> {
        topo.validate().map_err(|e| EmuError::Start(e.to_string()))?;
        info!(controller = %controller.socket_addr(), "dry-run: not starting the emulated network");
        Ok(Box::new(PlanNet::with_echo(
            topo.hosts().map(|h| h.name.clone()).collect(),
        )))
    }
}

impl RunningNet for PlanNet {
    fn host_names(&self) -> Vec<String> {
        self.hosts.clone()
    }

    fn exec(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError> {
        self.record(host, command, false)
    }

    fn run(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError> {
        self.record(host, command, false)
    }

    fn exec_bg(&mut self, host: &str, command: &str) -> Result<(), EmuError> {
        self.record(host, command, true).map(drop)
    }

    fn stats(&self) -> ExecStats {
        self.stats
    }

    fn stop(&mut self) -> Result<(), EmuError> {
        self.stopped = true;
        Ok(())
    }
}
