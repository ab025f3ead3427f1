//! 轿厢状态快照
//!
//! 供观察与测试使用的只读视图，可序列化为 JSON。

use serde::Serialize;

use super::car::{Car, CarState};
use super::direction::Direction;
use super::id::CarId;

/// 单台轿厢的只读状态快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarSnapshot {
    pub id: CarId,
    pub floor: u32,
    pub direction: Option<Direction>,
    pub state: CarState,
    pub up_stops: Vec<u32>,
    pub down_stops: Vec<u32>,
    pub occupancy: u32,
}

impl From<&Car> for CarSnapshot {
    fn from(car: &Car) -> CarSnapshot {
        CarSnapshot {
            id: car.id(),
            floor: car.current_floor(),
            direction: car.direction(),
            state: car.state(),
            up_stops: car.up_stops().iter().copied().collect(),
            down_stops: car.down_stops().iter().copied().collect(),
            occupancy: car.occupancy(),
        }
    }
}
