use anyhow::{bail, Result};
use clap::Parser;
use exercise_analyzer::app::{AnalyzeRequest, App};
use exercise_analyzer::config::Config;
use exercise_analyzer::models::Options;
use exercise_analyzer::utils::logging;
use serde_json::{json, Value as JsonValue};

/// 按练习规则分析一份提交，输出 JSON 报告
#[derive(Debug, Parser)]
#[command(name = "exercise_analyzer", version)]
struct Cli {
    /// 练习标识，如 two-fer
    exercise: String,
    /// 提交根目录
    input_path: String,
    /// 结果输出目录
    output_path: String,

    /// 直接指定源码文件（位于提交根目录下）
    #[arg(long)]
    file: Option<String>,
    /// 直接指定分析器模块
    #[arg(long)]
    module: Option<String>,
    /// 结果文件名
    #[arg(long)]
    output_file: Option<String>,
    /// 练习配置文件路径
    #[arg(long, env = "ANALYZER_EXERCISE_CONFIG")]
    exercise_config: Option<String>,
    /// 不写入结果文件
    #[arg(long)]
    skip_write: bool,
    /// 不打印摘要
    #[arg(long)]
    no_summary: bool,
    /// 显示详细日志
    #[arg(long, short)]
    verbose: bool,
    /// 透传给分析器的选项 KEY=VALUE，可重复
    #[arg(long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,
}

impl Cli {
    fn into_request(self) -> Result<AnalyzeRequest> {
        let mut options = Options::new();

        for pair in &self.options {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("选项格式应为 KEY=VALUE: {}", pair);
            };
            let value = serde_json::from_str(value).unwrap_or_else(|_| JsonValue::from(value));
            options.insert(key.to_string(), value);
        }

        if let Some(file) = self.file {
            options.insert("file".to_string(), json!(file));
        }
        if let Some(module) = self.module {
            options.insert("module".to_string(), json!(module));
        }
        if let Some(output_file) = self.output_file {
            options.insert("outputFile".to_string(), json!(output_file));
        }
        if let Some(exercise_config) = self.exercise_config {
            options.insert("exerciseConfigPath".to_string(), json!(exercise_config));
        }
        if self.skip_write {
            options.insert("writeResults".to_string(), json!(false));
        }
        if self.no_summary {
            options.insert("putsSummary".to_string(), json!(false));
        }

        Ok(AnalyzeRequest {
            exercise: self.exercise,
            input_path: self.input_path,
            output_path: self.output_path,
            options,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let request = cli.into_request()?;
    App::initialize(config).run(&request)?;

    Ok(())
}
