//! 轿厢状态机
//!
//! 每台轿厢维护当前楼层、行进朝向与两组待停靠楼层（上行一组、下行一组），
//! 按 SCAN 式策略沿当前方向服务完所有顺路停靠后才反向。反方向集合中的楼层
//! 在本趟行程中被直接越过，待反向后再服务。

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use super::direction::Direction;
use super::error::DispatchError;
use super::id::CarId;

/// 轿厢运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarState {
    Idle,
    Moving,
    DoorOpen,
    OutOfService,
}

/// 单台电梯轿厢：离散 tick 驱动的状态机。
///
/// 不变式：
/// - `up_stops` 与 `down_stops` 互不相交（重复请求是幂等的空操作）；
/// - `1 <= current_floor <= max_floor` 恒成立；
/// - 朝向为 `None` 当且仅当两组停靠均为空且状态为 `Idle`/`OutOfService`
///   （唯一例外：原地开门的那个 tick，见 [`Car::add_stop`]）。
#[derive(Debug)]
pub struct Car {
    id: CarId,
    current_floor: u32,
    max_floor: u32,
    direction: Option<Direction>,
    state: CarState,
    up_stops: BTreeSet<u32>,
    down_stops: BTreeSet<u32>,
    capacity: u32,
    occupancy: u32,
}

impl Car {
    /// 创建轿厢，初始停在 1 层、静止。
    pub fn new(id: CarId, max_floor: u32, capacity: u32) -> Car {
        Car {
            id,
            current_floor: 1,
            max_floor,
            direction: None,
            state: CarState::Idle,
            up_stops: BTreeSet::new(),
            down_stops: BTreeSet::new(),
            capacity,
            occupancy: 0,
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn max_floor(&self) -> u32 {
        self.max_floor
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn state(&self) -> CarState {
        self.state
    }

    pub fn up_stops(&self) -> &BTreeSet<u32> {
        &self.up_stops
    }

    pub fn down_stops(&self) -> &BTreeSet<u32> {
        &self.down_stops
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// 是否参与调度（停止服务的轿厢被排除）
    pub fn is_available(&self) -> bool {
        self.state != CarState::OutOfService
    }

    /// 是否完全静止：无朝向、无待停靠、门已关
    pub fn is_settled(&self) -> bool {
        self.direction.is_none()
            && self.no_pending()
            && matches!(self.state, CarState::Idle | CarState::OutOfService)
    }

    /// 到指定楼层的距离（层数）
    pub fn distance_to(&self, floor: u32) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    /// 轿厢是否正朝该楼层、以该方向行进。静止轿厢总是可以被改派，视为真。
    pub fn is_heading_toward(&self, floor: u32, direction: Direction) -> bool {
        match self.direction {
            None => true,
            Some(d) if d == direction => match direction {
                Direction::Up => self.current_floor < floor,
                Direction::Down => self.current_floor > floor,
            },
            Some(_) => false,
        }
    }

    /// 指派一个停靠楼层。
    ///
    /// 高于当前楼层进上行组，低于进下行组；恰为当前楼层且轿厢静止或开门中，
    /// 则原地开门一个 tick，不移动（行进中的轿厢无法停在正要离开的楼层，
    /// 视为空操作）。已在任一组中的楼层为幂等空操作。
    #[tracing::instrument(skip(self), fields(car = self.id.0, at = self.current_floor))]
    pub fn add_stop(&mut self, floor: u32) -> Result<(), DispatchError> {
        if self.state == CarState::OutOfService {
            return Err(DispatchError::OutOfService(self.id));
        }
        if floor < 1 || floor > self.max_floor {
            return Err(DispatchError::OutOfRange {
                floor,
                max_floor: self.max_floor,
            });
        }
        if self.up_stops.contains(&floor) || self.down_stops.contains(&floor) {
            trace!(floor, "停靠已在队列中");
            return Ok(());
        }

        if floor > self.current_floor {
            self.up_stops.insert(floor);
            debug!(floor, "加入上行停靠");
        } else if floor < self.current_floor {
            self.down_stops.insert(floor);
            debug!(floor, "加入下行停靠");
        } else if self.state != CarState::Moving {
            debug!(floor, "当前楼层请求：原地开门");
            self.state = CarState::DoorOpen;
        }
        Ok(())
    }

    /// 推进一个 tick。
    ///
    /// 开门中的轿厢本 tick 关门；若仍有待停靠则同一 tick 内继续移动一层。
    /// 移动后若新楼层在当前方向的停靠组中，则开门并清除该停靠。
    #[tracing::instrument(skip(self), fields(car = self.id.0, floor = self.current_floor))]
    pub fn step(&mut self) {
        if self.state == CarState::OutOfService {
            return;
        }

        if self.state == CarState::DoorOpen {
            trace!("关门");
            if self.no_pending() {
                self.go_idle();
                return;
            }
        } else if self.should_stop() {
            // 起步前已停在待停靠楼层（例如换向后被指派了当前楼层）
            self.open_door();
            return;
        }

        if self.no_pending() {
            self.go_idle();
            return;
        }

        let direction = self.choose_direction();
        self.direction = Some(direction);
        self.current_floor = match direction {
            Direction::Up => self.current_floor.saturating_add(1).min(self.max_floor),
            Direction::Down => self.current_floor.saturating_sub(1).max(1),
        };

        if self.should_stop() {
            self.open_door();
        } else {
            self.state = CarState::Moving;
            trace!(to = self.current_floor, ?direction, "移动一层");
        }
    }

    /// 行政操作：停止服务。未完成的停靠被静默丢弃，不再服务。
    pub fn set_out_of_service(&mut self) {
        let dropped = self.up_stops.len() + self.down_stops.len();
        if dropped > 0 {
            debug!(car = self.id.0, dropped, "停止服务，丢弃未完成停靠");
        }
        self.up_stops.clear();
        self.down_stops.clear();
        self.direction = None;
        self.state = CarState::OutOfService;
    }

    /// 行政操作：恢复服务，回到静止状态。
    pub fn return_to_service(&mut self) {
        if self.state == CarState::OutOfService {
            self.state = CarState::Idle;
        }
    }

    /// 乘客进入。满载或停止服务时拒绝。
    pub fn board(&mut self) -> bool {
        if self.state == CarState::OutOfService || self.occupancy >= self.capacity {
            return false;
        }
        self.occupancy += 1;
        true
    }

    /// 乘客离开。
    pub fn alight(&mut self) -> bool {
        if self.occupancy == 0 {
            return false;
        }
        self.occupancy -= 1;
        true
    }

    /// 当前楼层是否在当前方向的停靠组中。反方向组中的楼层不触发停靠。
    fn should_stop(&self) -> bool {
        match self.direction {
            Some(Direction::Up) => self.up_stops.contains(&self.current_floor),
            Some(Direction::Down) => self.down_stops.contains(&self.current_floor),
            None => false,
        }
    }

    /// 选择行进方向：当前方向仍有停靠则继续，否则反向；
    /// 静止起步时两组都有停靠的话优先上行。
    fn choose_direction(&self) -> Direction {
        match self.direction {
            Some(Direction::Up) if !self.up_stops.is_empty() => Direction::Up,
            Some(Direction::Down) if !self.down_stops.is_empty() => Direction::Down,
            Some(d) => d.reversed(),
            None => {
                if self.up_stops.is_empty() {
                    Direction::Down
                } else {
                    Direction::Up
                }
            }
        }
    }

    fn open_door(&mut self) {
        debug!(car = self.id.0, floor = self.current_floor, "🚪 停靠开门");
        self.state = CarState::DoorOpen;
        self.up_stops.remove(&self.current_floor);
        self.down_stops.remove(&self.current_floor);
    }

    fn go_idle(&mut self) {
        self.direction = None;
        self.state = CarState::Idle;
    }

    fn no_pending(&self) -> bool {
        self.up_stops.is_empty() && self.down_stops.is_empty()
    }
}
