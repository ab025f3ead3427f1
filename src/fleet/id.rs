//! 标识符类型
//!
//! 定义轿厢的唯一标识符。

use serde::{Deserialize, Serialize};

/// 轿厢标识符（编队内从 1 起连续编号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarId(pub u32);
