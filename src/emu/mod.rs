//! 仿真引擎边界模块
//!
//! 拓扑描述进、主机句柄出。引擎本体（命名空间隔离、虚拟交换机、
//! 流量整形）在本仓库范围之外，这里只定义边界。

mod engine;
mod plan;
mod process;

pub use engine::{EmuError, Engine, ExecReport, ExecStats, RunningNet};
pub use plan::{PlanEngine, PlanEntry, PlanNet};
pub use process::{DEFAULT_EXEC_PREFIX, ProcessEngine, ProcessNet};
