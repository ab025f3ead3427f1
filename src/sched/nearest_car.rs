//! 最近轿厢策略
//!
//! 距离越近得分越低；正朝请求方向行进的轿厢从得分中扣除固定奖励，
//! 使顺路轿厢优先于名义上更近、但背向行驶或静止更远的轿厢。

use tracing::trace;

use super::SchedulerPolicy;
use crate::fleet::{Car, CarId, Request};

/// 顺路奖励：从候选得分中扣除的固定值
pub const HEADING_BONUS: i64 = 100;

/// 贪心最近轿厢策略。厅外呼叫一旦指派便不再重新分配，
/// 因此并非全局最优，这是有意的简化。
#[derive(Debug, Default)]
pub struct NearestCar;

impl SchedulerPolicy for NearestCar {
    fn select_car(&self, cars: &[Car], request: &Request) -> Option<CarId> {
        let mut best: Option<(i64, CarId)> = None;

        for car in cars.iter().filter(|c| c.is_available()) {
            let mut score = i64::from(car.distance_to(request.floor));
            if car.is_heading_toward(request.floor, request.direction) {
                score -= HEADING_BONUS;
            }
            trace!(car = car.id().0, score, "候选轿厢得分");

            // 严格小于：同分时保留编号更小的轿厢（编队按编号升序）
            if best.is_none_or(|(s, _)| score < s) {
                best = Some((score, car.id()));
            }
        }

        best.map(|(_, id)| id)
    }
}
