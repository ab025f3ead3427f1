//! 电梯编队模块
//!
//! 此模块包含电梯仿真的核心组件：轿厢状态机、乘梯请求、错误类型与编队控制器。

// 子模块声明
mod car;
mod controller;
mod direction;
mod error;
mod id;
mod request;
mod snapshot;

// 重新导出公共接口
pub use car::{Car, CarState};
pub use controller::Controller;
pub use direction::Direction;
pub use error::DispatchError;
pub use id::CarId;
pub use request::{Origin, Request};
pub use snapshot::CarSnapshot;
