//! 定论服务
//!
//! 纯变换：保证输出边界上的提交一定带有确定结论

use tracing::debug;

use crate::models::{FinalVerdict, Report, Submission};

/// 定论服务
#[derive(Debug)]
pub struct Finalizer {
    fallback: FinalVerdict,
}

impl Finalizer {
    /// 分析后仍未定论的提交转人工
    pub fn new() -> Self {
        Self {
            fallback: FinalVerdict::Refer,
        }
    }

    pub fn with_fallback(fallback: FinalVerdict) -> Self {
        Self { fallback }
    }

    /// 定出结论，返回定论后的提交及其报告
    pub fn finalize(&self, mut submission: Submission) -> (Submission, Report) {
        let report = submission.finalize(self.fallback);
        debug!(
            "定论: {} ({} 条评语)",
            report.status,
            report.comments.len()
        );
        (submission, report)
    }
}

impl Default for Finalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::HelloWorld;
    use crate::models::Verdict;
    use std::sync::Arc;

    fn submission() -> Submission {
        Submission::new("/sub", "/sub/lib", "hello_world.ex", Arc::new(HelloWorld))
    }

    #[test]
    fn test_unset_verdict_defaults_to_refer() {
        let (submission, report) = Finalizer::new().finalize(submission());
        assert_eq!(report.status, FinalVerdict::Refer);
        assert_eq!(submission.verdict(), Verdict::Refer);
    }

    #[test]
    fn test_existing_verdict_is_kept() {
        let mut s = submission();
        s.disapprove();
        let (_, report) = Finalizer::with_fallback(FinalVerdict::Approve).finalize(s);
        assert_eq!(report.status, FinalVerdict::Disapprove);
    }
}
