//! 攻击流量模块
//!
//! 定义洪泛攻击的参数模型与按固定顺序发起攻击的编排器。

mod orchestrator;
mod profile;
mod scenario;

pub use orchestrator::{Orchestrator, random_host_ip};
pub use profile::{AttackProfile, FloodMode, SpoofSource, Target};
pub use scenario::{ScenarioSpec, default_attacks};
