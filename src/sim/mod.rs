//! 仿真核心模块
//!
//! 此模块包含 tick 驱动仿真的核心组件：离散时间刻度与可回放的场景描述。

// 子模块声明
mod scenario;
mod tick;

// 重新导出公共接口
pub use scenario::{
    FleetSpec, ScenarioEvent, ScenarioMeta, ScenarioOutcome, ScenarioSpec, run_scenario,
};
pub use tick::Tick;
