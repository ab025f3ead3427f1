//! 编队控制器
//!
//! 管理整个轿厢编队：接收厅外/轿厢内请求，委托调度策略选择轿厢，
//! 并按全局 tick 同步推进所有轿厢。控制器由调用方显式持有，无全局状态。

use tracing::{debug, info, trace, warn};

use super::car::Car;
use super::direction::Direction;
use super::error::DispatchError;
use super::id::CarId;
use super::request::Request;
use super::snapshot::CarSnapshot;
use crate::sched::{NearestCar, SchedulerPolicy};
use crate::sim::Tick;

/// 编队控制器。`&mut self` 接口天然保证请求与 tick 推进串行化：
/// 一次请求要么完整落在某个 tick 之前，要么完整落在其后。
pub struct Controller {
    cars: Vec<Car>,
    max_floor: u32,
    policy: Box<dyn SchedulerPolicy>,
    now: Tick,
}

impl Controller {
    /// 创建编队：`num_cars` 台轿厢，均停在 1 层、静止，使用最近轿厢策略。
    pub fn new(num_cars: u32, max_floor: u32, capacity_per_car: u32) -> Controller {
        Controller::with_policy(
            num_cars,
            max_floor,
            capacity_per_car,
            Box::new(NearestCar),
        )
    }

    /// 创建编队并指定调度策略。
    pub fn with_policy(
        num_cars: u32,
        max_floor: u32,
        capacity_per_car: u32,
        policy: Box<dyn SchedulerPolicy>,
    ) -> Controller {
        let cars = (1..=num_cars)
            .map(|i| Car::new(CarId(i), max_floor, capacity_per_car))
            .collect();
        Controller {
            cars,
            max_floor,
            policy,
            now: Tick::ZERO,
        }
    }

    /// 当前仿真时刻
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn max_floor(&self) -> u32 {
        self.max_floor
    }

    /// 编队只读视图（按轿厢编号升序）
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// 厅外呼叫：楼层 `floor` 有乘客要往 `direction` 方向。
    ///
    /// 成功时返回被指派的轿厢编号。失败即丢弃，不排队不重试，
    /// 调用方如需重试须自行重新发起。
    #[tracing::instrument(skip(self))]
    pub fn request_hall_call(
        &mut self,
        floor: u32,
        direction: Direction,
    ) -> Result<CarId, DispatchError> {
        if floor < 1 || floor > self.max_floor {
            return Err(DispatchError::OutOfRange {
                floor,
                max_floor: self.max_floor,
            });
        }
        let request = Request::hall(floor, direction);
        let id = self
            .policy
            .select_car(&self.cars, &request)
            .ok_or(DispatchError::NoCarAvailable)?;
        debug!(car = id.0, "📞 厅外呼叫已指派");
        self.car_mut(id)?.add_stop(floor)?;
        Ok(id)
    }

    /// 轿厢内呼叫：轿厢 `car` 内的乘客要去 `floor` 层。直达本轿厢，不经过调度策略。
    #[tracing::instrument(skip(self))]
    pub fn request_car_call(&mut self, car: CarId, floor: u32) -> Result<(), DispatchError> {
        let target = self.car_mut(car)?;
        let direction = if floor >= target.current_floor() {
            Direction::Up
        } else {
            Direction::Down
        };
        let request = Request::car(car, floor, direction);
        trace!(?request, "🔘 轿厢内呼叫");
        target.add_stop(request.floor)
    }

    /// 推进一个全局 tick：所有轿厢按编号升序各推进一次。
    pub fn step(&mut self) {
        self.now = self.now.next();
        trace!(tick = self.now.0, "推进一个 tick");
        for car in &mut self.cars {
            car.step();
        }
    }

    /// 编队是否完全静止：所有轿厢无朝向、无待停靠、门已关。
    pub fn is_settled(&self) -> bool {
        self.cars.iter().all(Car::is_settled)
    }

    /// 所有轿厢的只读快照（按编号升序）
    pub fn car_states(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(CarSnapshot::from).collect()
    }

    /// 行政操作：将轿厢移出服务。其未完成停靠被静默丢弃。
    pub fn set_out_of_service(&mut self, car: CarId) -> Result<(), DispatchError> {
        self.car_mut(car)?.set_out_of_service();
        Ok(())
    }

    /// 行政操作：恢复轿厢服务。
    pub fn return_to_service(&mut self, car: CarId) -> Result<(), DispatchError> {
        self.car_mut(car)?.return_to_service();
        Ok(())
    }

    /// 乘客进入轿厢；满载或停止服务时返回 `Ok(false)`。
    pub fn board(&mut self, car: CarId) -> Result<bool, DispatchError> {
        Ok(self.car_mut(car)?.board())
    }

    /// 乘客离开轿厢；空轿厢返回 `Ok(false)`。
    pub fn alight(&mut self, car: CarId) -> Result<bool, DispatchError> {
        Ok(self.car_mut(car)?.alight())
    }

    /// 反复推进直到编队静止或耗尽 tick 预算。返回是否达到静止。
    #[tracing::instrument(skip(self))]
    pub fn run_until_settled(&mut self, max_ticks: u64) -> bool {
        info!("▶️  开始推进仿真");

        let mut ticks = 0u64;
        while !self.is_settled() {
            if ticks >= max_ticks {
                warn!(ticks, "达到 tick 预算，编队尚未静止");
                return false;
            }
            self.step();
            ticks += 1;
        }

        info!(ticks, final_tick = self.now.0, "✅ 编队已静止");
        true
    }

    fn car_mut(&mut self, id: CarId) -> Result<&mut Car, DispatchError> {
        let idx = id
            .0
            .checked_sub(1)
            .map(|i| i as usize)
            .filter(|&i| i < self.cars.len())
            .ok_or(DispatchError::UnknownCar(id))?;
        Ok(&mut self.cars[idx])
    }
}
