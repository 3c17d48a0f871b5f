//! Engine-facing boundary: a topology description goes in, live host
//! handles come out.

use thiserror::Error;

use crate::net::{ControllerRef, Topology};

/// Emulation boundary errors.
#[derive(Debug, Error)]
pub enum EmuError {
    #[error("unknown host: {0}")]
    UnknownHost(String),
    #[error("failed to spawn command on {host}: {source}")]
    Spawn {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("engine failed to start network: {0}")]
    Start(String),
    #[error("engine failed to stop network: {0}")]
    Stop(String),
}

/// Outcome of one command issued to a host.
///
/// `exit_code` is `None` when the command was left running detached;
/// observing it is optional, sequencing never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecReport {
    pub host: String,
    pub command: String,
    pub exit_code: Option<i32>,
}

/// Counters for commands issued on a running network.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecStats {
    pub issued: u64,
    pub failed: u64,
}

/// Minimal engine API: turns a topology description into a running network
/// whose switches connect to the given remote controller.
pub trait Engine {
    fn start(
        &mut self,
        topo: &Topology,
        controller: &ControllerRef,
    ) -> Result<Box<dyn RunningNet>, EmuError>;
}

/// A started network exposing per-host command execution.
pub trait RunningNet {
    /// Host names, in topology order.
    fn host_names(&self) -> Vec<String>;

    /// Issue a shell command on `host` without waiting for completion.
    fn exec(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError>;

    /// Issue a shell command on `host` and wait for it to exit.
    fn run(&mut self, host: &str, command: &str) -> Result<ExecReport, EmuError>;

    /// Issue a shell command on `host` as a detached background helper.
    fn exec_bg(&mut self, host: &str, command: &str) -> Result<(), EmuError> {
        self.exec(host, command).map(drop)
    }

    fn stats(&self) -> ExecStats;

    /// Tear the network down, releasing all host/switch resources.
    fn stop(&mut self) -> Result<(), EmuError>;
}
