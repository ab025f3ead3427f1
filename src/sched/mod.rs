//! 调度策略（Scheduling policies）
//!
//! 目前提供最基础的最近轿厢（nearest car）策略，后续可在此扩展
//! 目的层分组（destination dispatch）、分区调度等策略。

use crate::fleet::{Car, CarId, Request};

mod nearest_car;

pub use nearest_car::{HEADING_BONUS, NearestCar};

/// 轿厢选择策略抽象
pub trait SchedulerPolicy: std::fmt::Debug {
    /// 为一次厅外呼叫选择轿厢。对同一编队快照与请求必须返回确定的结果；
    /// 没有任何在役轿厢时返回 `None`。
    fn select_car(&self, cars: &[Car], request: &Request) -> Option<CarId>;
}
