//! 提交分析流程 - 流程层
//!
//! 核心职责：定义"一份提交"的完整处理流程
//!
//! 流程顺序（严格线性，不回退）：
//! 1. 参数解析
//! 2. 练习解析 + 创建提交（无法解析分析器 → 直接输出不通过）
//! 3. 文件检查
//! 4. 分析调度
//! 5. 定论
//! 6. 写入结果
//! 7. 打印摘要

use tracing::{info, warn};

use crate::analyzers::AnalyzerRegistry;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Options, Report, RunParams, Submission};
use crate::services::{
    AnalyzerDispatcher, Checker, ExerciseResolver, Finalizer, ParamResolver, ResultWriter,
    SummaryPrinter,
};
use crate::workflow::run_ctx::RunCtx;

/// 创建提交的结果
#[derive(Debug)]
pub enum Creation {
    /// 提交已创建，继续流程
    Ready(Submission),
    /// 分析器无法解析，已定论为不通过（必要时已写入结果）
    Unresolved(Submission, Report),
}

/// 提交工厂
///
/// 解析练习并创建提交记录。分析器无法解析时不向上抛错，
/// 而是直接生成"不通过、无评语"的结果
pub struct SubmissionFactory<'a> {
    resolver: ExerciseResolver,
    registry: &'a AnalyzerRegistry,
    writer: ResultWriter,
}

impl<'a> SubmissionFactory<'a> {
    pub fn new(config: &Config, registry: &'a AnalyzerRegistry) -> Self {
        Self {
            resolver: ExerciseResolver::new(config),
            registry,
            writer: ResultWriter::new(),
        }
    }

    /// 创建提交
    ///
    /// 只有练习配置读取失败、或兜底结果写入失败时返回 `Err`
    pub fn create(&self, params: &RunParams) -> AppResult<Creation> {
        let ctx = RunCtx::from(params);

        let resolved = self
            .resolver
            .resolve(params, self.registry)
            .and_then(|location| {
                let analyzer = self.registry.resolve(&location.analyzer_reference)?;
                Ok((location, analyzer))
            });

        match resolved {
            Ok((location, analyzer)) => {
                info!("{} 使用分析器 {}", ctx, analyzer.name());
                let submission = Submission::new(
                    params.path.clone(),
                    location.code_path,
                    location.code_file,
                    analyzer,
                )
                .with_options(params.extra.clone());
                Ok(Creation::Ready(submission))
            }
            Err(AppError::Analyzer(e)) => {
                warn!("{} ⚠️ 无法解析分析器，直接判定不通过: {}", ctx, e);
                let mut submission = Submission::unresolved(params.path.clone());
                let report = submission.finalize(crate::models::FinalVerdict::Disapprove);
                self.writer.write(&report, params)?;
                Ok(Creation::Unresolved(submission, report))
            }
            Err(e) => Err(e),
        }
    }
}

/// 提交分析流程
///
/// - 编排完整的单次分析流程
/// - 不持有任何可变共享状态，可以在多个线程上各自运行
pub struct SubmissionFlow {
    config: Config,
    registry: AnalyzerRegistry,
    param_resolver: ParamResolver,
    checker: Checker,
    dispatcher: AnalyzerDispatcher,
    finalizer: Finalizer,
    writer: ResultWriter,
    printer: SummaryPrinter,
}

impl SubmissionFlow {
    /// 创建新的分析流程
    pub fn new(config: Config, registry: AnalyzerRegistry) -> Self {
        Self {
            param_resolver: ParamResolver::new(&config),
            config,
            registry,
            checker: Checker::new(),
            dispatcher: AnalyzerDispatcher::new(),
            finalizer: Finalizer::new(),
            writer: ResultWriter::new(),
            printer: SummaryPrinter::new(),
        }
    }

    /// 分析一份提交，返回定论后的提交记录
    pub fn run(
        &self,
        exercise: &str,
        input_path: &str,
        output_path: &str,
        options: &Options,
    ) -> AppResult<Submission> {
        let params = self
            .param_resolver
            .resolve(exercise, input_path, output_path, options);
        self.run_with_params(&params)
    }

    /// 使用已解析好的参数运行流程
    pub fn run_with_params(&self, params: &RunParams) -> AppResult<Submission> {
        let ctx = RunCtx::from(params);
        info!("{} 🔍 开始分析", ctx);

        // ========== 创建提交 ==========
        let submission = match SubmissionFactory::new(&self.config, &self.registry).create(params)? {
            Creation::Ready(submission) => submission,
            Creation::Unresolved(submission, _) => return Ok(submission),
        };

        // ========== 检查 → 调度 → 定论 ==========
        let submission = self.checker.check(submission);
        let submission = self.dispatcher.dispatch(submission);
        let (submission, report) = self.finalizer.finalize(submission);

        info!(
            "{} ✓ 分析完成: {} ({} 条评语)",
            ctx,
            report.status,
            report.comments.len()
        );

        // ========== 输出 ==========
        self.writer.write(&report, params)?;
        self.printer.print(&report, params);

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinalVerdict, Verdict};
    use serde_json::json;

    fn options(value: serde_json::Value) -> Options {
        let mut options: Options = value.as_object().cloned().unwrap();
        options.insert(
            "exerciseConfigPath".to_string(),
            json!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/exercise_config.json")),
        );
        options.insert("putsSummary".to_string(), json!(false));
        options
    }

    fn params(exercise: &str, extra: serde_json::Value) -> RunParams {
        ParamResolver::new(&Config::default()).resolve(exercise, "/tmp/none", "/tmp/none", &options(extra))
    }

    #[test]
    fn test_factory_unknown_exercise_short_circuits() {
        let registry = AnalyzerRegistry::default();
        let creation = SubmissionFactory::new(&Config::default(), &registry)
            .create(&params("does-not-exist", json!({"writeResults": false})))
            .unwrap();

        match creation {
            Creation::Unresolved(submission, report) => {
                assert_eq!(report.status, FinalVerdict::Disapprove);
                assert!(report.comments.is_empty());
                assert_eq!(submission.verdict(), Verdict::Disapprove);
            }
            Creation::Ready(_) => panic!("应当短路为不通过"),
        }
    }

    #[test]
    fn test_factory_unknown_module_short_circuits() {
        let registry = AnalyzerRegistry::default();
        let creation = SubmissionFactory::new(&Config::default(), &registry)
            .create(&params(
                "two-fer",
                json!({"file": "x.ex", "module": "Retired", "writeResults": false}),
            ))
            .unwrap();
        assert!(matches!(creation, Creation::Unresolved(..)));
    }

    #[test]
    fn test_factory_ready_carries_pass_through_options() {
        let registry = AnalyzerRegistry::default();
        let creation = SubmissionFactory::new(&Config::default(), &registry)
            .create(&params("two-fer", json!({"strict": true})))
            .unwrap();

        match creation {
            Creation::Ready(submission) => {
                assert_eq!(submission.code_path(), std::path::Path::new("/tmp/none/lib"));
                assert_eq!(submission.code_file(), "two_fer.ex");
                assert_eq!(submission.option("strict"), Some(&json!(true)));
            }
            Creation::Unresolved(..) => panic!("two-fer 应当能解析"),
        }
    }

    #[test]
    fn test_flow_missing_file_is_referred() {
        let flow = SubmissionFlow::new(Config::default(), AnalyzerRegistry::default());
        let submission = flow
            .run("two-fer", "/tmp/definitely-missing-sub", "/tmp", &options(json!({"writeResults": false})))
            .unwrap();

        assert_eq!(submission.verdict(), Verdict::Refer);
        assert_eq!(submission.comments().len(), 1);
    }
}
