//! 运行方向
//!
//! 定义乘梯请求与轿厢行进的方向。静止轿厢的朝向用 `Option<Direction>` 表示。

use serde::{Deserialize, Serialize};

/// 行进方向（上行或下行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// 反向
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
