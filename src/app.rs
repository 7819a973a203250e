use crate::analyzers::AnalyzerRegistry;
use crate::config::Config;
use crate::models::{Options, Submission};
use crate::services::ParamResolver;
use crate::utils::logging::{log_run_complete, log_startup};
use crate::workflow::SubmissionFlow;
use anyhow::{Context, Result};

/// 一次分析请求（来自命令行）
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub exercise: String,
    pub input_path: String,
    pub output_path: String,
    pub options: Options,
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: SubmissionFlow,
}

impl App {
    /// 初始化应用（只包含内置分析器）
    pub fn initialize(config: Config) -> Self {
        let registry = AnalyzerRegistry::new(config.module_namespace.clone());
        Self::with_registry(config, registry)
    }

    /// 使用自定义分析器注册表初始化应用
    pub fn with_registry(config: Config, registry: AnalyzerRegistry) -> Self {
        Self {
            flow: SubmissionFlow::new(config.clone(), registry),
            config,
        }
    }

    /// 运行应用主逻辑
    pub fn run(&self, request: &AnalyzeRequest) -> Result<Submission> {
        let params = ParamResolver::new(&self.config).resolve(
            &request.exercise,
            &request.input_path,
            &request.output_path,
            &request.options,
        );

        log_startup(&self.config, &params);

        let submission = self
            .flow
            .run_with_params(&params)
            .with_context(|| format!("分析失败: 练习 {} / 路径 {}", params.exercise, params.path))?;

        if let Some(report) = submission.report() {
            log_run_complete(&report, &params);
        }

        Ok(submission)
    }
}
