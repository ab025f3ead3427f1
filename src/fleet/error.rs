//! 错误类型
//!
//! 定义请求路径上的同步错误。所有错误均为局部返回值，失败的请求不改变任何状态，
//! 仿真照常继续。

use super::id::CarId;
use thiserror::Error;

/// 调度/请求错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// 请求楼层超出 [1, max_floor]
    #[error("楼层 {floor} 超出范围 [1, {max_floor}]")]
    OutOfRange { floor: u32, max_floor: u32 },

    /// 轿厢内呼叫引用了不存在的轿厢
    #[error("轿厢 {0:?} 不存在")]
    UnknownCar(CarId),

    /// 厅外呼叫到达时没有任何在役轿厢；请求直接丢弃，不排队不重试
    #[error("没有可用轿厢")]
    NoCarAvailable,

    /// 向停止服务的轿厢指派停靠
    #[error("轿厢 {0:?} 已停止服务")]
    OutOfService(CarId),
}
