//! 运行上下文
//!
//! 封装"我正在分析哪个练习的哪份提交"这一信息，用作日志前缀

use std::fmt::Display;

use crate::models::RunParams;

/// 单次运行上下文
#[derive(Debug, Clone)]
pub struct RunCtx {
    /// 练习标识
    pub exercise: String,

    /// 提交根目录
    pub path: String,
}

impl RunCtx {
    pub fn new(exercise: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            exercise: exercise.into(),
            path: path.into(),
        }
    }
}

impl From<&RunParams> for RunCtx {
    fn from(params: &RunParams) -> Self {
        Self::new(params.exercise.clone(), params.path.clone())
    }
}

impl Display for RunCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[练习 {} | 路径 {}]", self.exercise, self.path)
    }
}
