use serde::{Deserialize, Serialize};

/// 提交结论（流水线内部使用，允许未定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// 尚未定出结论
    #[default]
    Unset,
    /// 通过
    Approve,
    /// 不通过
    Disapprove,
    /// 转人工审核
    Refer,
}

impl Verdict {
    /// 转换为最终结论，未定时返回 None
    pub fn resolved(self) -> Option<FinalVerdict> {
        match self {
            Verdict::Unset => None,
            Verdict::Approve => Some(FinalVerdict::Approve),
            Verdict::Disapprove => Some(FinalVerdict::Disapprove),
            Verdict::Refer => Some(FinalVerdict::Refer),
        }
    }

    /// 是否为否定性结论（不通过或转人工）
    pub fn is_adverse(self) -> bool {
        matches!(self, Verdict::Disapprove | Verdict::Refer)
    }
}

/// 最终结论
///
/// 没有"未定"分支，输出边界上的报告只能携带这三种结论之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalVerdict {
    Approve,
    Disapprove,
    Refer,
}

impl FinalVerdict {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            FinalVerdict::Approve => "approve",
            FinalVerdict::Disapprove => "disapprove",
            FinalVerdict::Refer => "refer",
        }
    }
}

impl From<FinalVerdict> for Verdict {
    fn from(verdict: FinalVerdict) -> Self {
        match verdict {
            FinalVerdict::Approve => Verdict::Approve,
            FinalVerdict::Disapprove => Verdict::Disapprove,
            FinalVerdict::Refer => Verdict::Refer,
        }
    }
}

impl std::fmt::Display for FinalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
