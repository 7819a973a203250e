//! 分析调度服务
//!
//! 未中止的提交交给分析器；分派前已中止的提交一律转人工，不运行分析

use tracing::{debug, error, info};

use crate::models::{templates, Comment, Submission};

/// 分析调度服务
#[derive(Debug, Default)]
pub struct AnalyzerDispatcher;

impl AnalyzerDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// 调度提交
    ///
    /// - 已中止：结论改为转人工（覆盖检查阶段给出的不通过）
    /// - 未中止：运行分析器，返回后标记为已分析；分析器自己给出的结论和中止标记原样保留
    /// - 分析器报错：追加 `analyzer_failed` 评语并转人工，不向上抛出
    pub fn dispatch(&self, mut submission: Submission) -> Submission {
        if submission.is_halted() {
            info!("提交已中止，转人工审核");
            submission.refer();
            return submission;
        }

        let (Some(analyzer), Some(code)) = (submission.analyzer(), submission.code().map(str::to_owned)) else {
            error!("提交缺少分析器或源码，转人工审核");
            submission.halt();
            submission.refer();
            return submission;
        };

        debug!("运行分析器 {}", analyzer.name());

        match analyzer.analyze(&mut submission, &code) {
            Ok(()) => {
                submission.mark_analyzed();
                if submission.is_halted() {
                    info!("分析器 {} 中止了提交，结论 {:?}", analyzer.name(), submission.verdict());
                }
            }
            Err(e) => {
                error!("❌ 分析器 {} 执行失败: {}", analyzer.name(), e);
                submission.push_comment(
                    Comment::new(templates::GENERAL_ANALYZER_FAILED)
                        .with_param("analyzer", analyzer.name())
                        .with_param("error", e.to_string()),
                );
                submission.refer();
            }
        }

        submission
    }
}
