//! 标准分析报告
//!
//! `{"status": ..., "comments": [...]}`，下游工具只读取这个结构

use serde::{Deserialize, Serialize};

use crate::error::{AppResult, FileError};
use crate::models::comment::Comment;
use crate::models::verdict::FinalVerdict;

/// 最终分析报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub status: FinalVerdict,
    pub comments: Vec<Comment>,
}

impl Report {
    /// 不带评语的否定报告（无法解析分析器时使用）
    pub fn disapprove() -> Self {
        Self {
            status: FinalVerdict::Disapprove,
            comments: Vec::new(),
        }
    }

    /// 序列化为紧凑 JSON
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self).map_err(FileError::from)?)
    }
}
