//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::{Report, RunParams};

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 info，详细模式为 debug。
/// 日志写到 stderr，stdout 留给分析摘要。重复初始化不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, params: &RunParams) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 练习配置: {}", params.exercise_config_path);
    info!("📂 源码子目录: {}", config.code_subdir);
    info!("{}", "=".repeat(60));
}

/// 记录运行完成信息
pub fn log_run_complete(report: &Report, params: &RunParams) {
    info!("\n{}", "─".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 结论: {} / 评语 {} 条", report.status, report.comments.len());
    if params.write_results {
        info!("结果已保存至: {}", params.output_file_path().display());
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
