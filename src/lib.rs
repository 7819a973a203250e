//! # Exercise Analyzer
//!
//! 按练习专属的静态分析规则为提交打分，并输出机器可读的结论
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 提交记录、结论、评语、运行参数、练习配置
//! - `Submission` - 贯穿流水线的唯一可变记录
//!
//! ### ② 分析器能力层（Analyzers）
//! - `analyzers/` - `Analyzer` trait 与静态注册表
//! - `TwoFer` / `HelloWorld` - 内置练习分析器
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 每个阶段一个服务，只处理一份提交
//! - `ParamResolver` → `ExerciseResolver` → `Checker` → `AnalyzerDispatcher`
//!   → `Finalizer` → `ResultWriter` → `SummaryPrinter`
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一份提交"的完整处理流程
//! - `SubmissionFactory` - 创建提交，无法解析分析器时兜底为不通过
//! - `SubmissionFlow` - 流程编排，严格线性
//!
//! ## 失败处理
//!
//! 提交本身的问题（未知练习、缺少源码、分析器报错）不会让批量评测崩溃；
//! 部署问题（练习配置读不到、结果写不进去）直接返回错误

pub mod analyzers;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use analyzers::{Analyzer, AnalyzerRegistry};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Comment, FinalVerdict, Options, Report, RunParams, Submission, Verdict};
pub use workflow::{SubmissionFactory, SubmissionFlow};

/// 分析一份提交
///
/// 使用环境变量中的配置和内置分析器。返回定论后的提交记录；
/// 只有练习配置读取失败或结果写入失败时返回 `Err`
pub fn analyze(
    exercise: &str,
    input_path: &str,
    output_path: &str,
    options: &Options,
) -> AppResult<Submission> {
    let config = Config::from_env();
    let registry = AnalyzerRegistry::new(config.module_namespace.clone());
    SubmissionFlow::new(config, registry).run(exercise, input_path, output_path, options)
}
