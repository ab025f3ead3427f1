//! 乘梯请求
//!
//! 定义厅外呼叫与轿厢内呼叫的不可变请求值。请求由控制器立即消费，不做保留。

use super::direction::Direction;
use super::id::CarId;

/// 请求来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// 厅外按钮（楼层 + 方向）
    Hall,
    /// 轿厢内按钮（目的楼层）
    Car(CarId),
}

/// 一次乘梯请求。创建后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u32,
    pub direction: Direction,
    pub origin: Origin,
}

impl Request {
    /// 构造厅外呼叫
    pub fn hall(floor: u32, direction: Direction) -> Request {
        Request {
            floor,
            direction,
            origin: Origin::Hall,
        }
    }

    /// 构造轿厢内呼叫
    pub fn car(car: CarId, floor: u32, direction: Direction) -> Request {
        Request {
            floor,
            direction,
            origin: Origin::Car(car),
        }
    }
}
