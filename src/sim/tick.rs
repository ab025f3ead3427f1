//! 仿真时间类型
//!
//! 定义离散时间刻度（tick）及其推进。

/// 仿真时刻（离散 tick 计数）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// 推进一个 tick
    pub fn next(self) -> Tick {
        Tick(self.0.saturating_add(1))
    }
}
