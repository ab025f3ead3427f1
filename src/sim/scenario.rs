//! 场景描述
//!
//! 定义可从 JSON 加载的仿真场景：编队规模与按 tick 排布的请求序列，
//! 以及确定性的回放器。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::fleet::{CarId, CarSnapshot, Controller, Direction};

/// 场景描述文件的顶层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    pub fleet: FleetSpec,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// 编队规模
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSpec {
    pub cars: u32,
    pub max_floor: u32,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

fn default_capacity() -> u32 {
    10
}

/// 场景事件：在指定 tick 注入的一次请求或行政操作
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioEvent {
    HallCall {
        at_tick: u64,
        floor: u32,
        direction: Direction,
    },
    CarCall {
        at_tick: u64,
        car: u32,
        floor: u32,
    },
    OutOfService {
        at_tick: u64,
        car: u32,
    },
    ReturnToService {
        at_tick: u64,
        car: u32,
    },
}

impl ScenarioEvent {
    pub fn at_tick(&self) -> u64 {
        match self {
            ScenarioEvent::HallCall { at_tick, .. }
            | ScenarioEvent::CarCall { at_tick, .. }
            | ScenarioEvent::OutOfService { at_tick, .. }
            | ScenarioEvent::ReturnToService { at_tick, .. } => *at_tick,
        }
    }
}

/// 场景运行结果
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub settled: bool,
    pub ticks: u64,
    pub cars: Vec<CarSnapshot>,
}

/// 回放场景。
///
/// 每个 tick 先注入该 tick 的全部事件、再同步推进编队，因此一次请求
/// 永远不会观察到推进到一半的轿厢。事件耗尽且编队静止时结束；
/// 到达 `max_ticks` 预算时无论是否静止都结束。
#[tracing::instrument(skip(spec), fields(cars = spec.fleet.cars, max_floor = spec.fleet.max_floor))]
pub fn run_scenario(spec: &ScenarioSpec, max_ticks: u64) -> ScenarioOutcome {
    let mut controller = Controller::new(spec.fleet.cars, spec.fleet.max_floor, spec.fleet.capacity);

    // 稳定排序：同一 tick 的事件保持文件内顺序
    let mut events: Vec<&ScenarioEvent> = spec.events.iter().collect();
    events.sort_by_key(|e| e.at_tick());

    let mut next = 0usize;
    let mut tick = 0u64;
    loop {
        while next < events.len() && events[next].at_tick() <= tick {
            apply(&mut controller, events[next]);
            next += 1;
        }

        if next >= events.len() && controller.is_settled() {
            debug!(tick, "场景回放完成");
            return ScenarioOutcome {
                settled: true,
                ticks: tick,
                cars: controller.car_states(),
            };
        }
        if tick >= max_ticks {
            warn!(tick, "达到 tick 预算，场景提前结束");
            return ScenarioOutcome {
                settled: controller.is_settled(),
                ticks: tick,
                cars: controller.car_states(),
            };
        }

        controller.step();
        tick += 1;
    }
}

fn apply(controller: &mut Controller, event: &ScenarioEvent) {
    let outcome = match *event {
        ScenarioEvent::HallCall {
            floor, direction, ..
        } => controller.request_hall_call(floor, direction).map(|_| ()),
        ScenarioEvent::CarCall { car, floor, .. } => {
            controller.request_car_call(CarId(car), floor)
        }
        ScenarioEvent::OutOfService { car, .. } => controller.set_out_of_service(CarId(car)),
        ScenarioEvent::ReturnToService { car, .. } => controller.return_to_service(CarId(car)),
    };
    if let Err(err) = outcome {
        // 失败即丢弃，不重试
        warn!(event = ?event, %err, "请求被拒绝");
    }
}
