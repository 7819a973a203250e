//! 单次运行的参数
//!
//! 由 `ParamResolver` 生成，生成后只读

use serde_json::{Map, Value as JsonValue};

/// 调用方传入的选项表
pub type Options = Map<String, JsonValue>;

/// 可识别的选项键（驼峰为主，下划线为别名）
pub mod keys {
    pub const EXERCISE: &[&str] = &["exercise"];
    pub const PATH: &[&str] = &["path"];
    pub const FILE: &[&str] = &["file"];
    pub const MODULE: &[&str] = &["module"];
    pub const OUTPUT_PATH: &[&str] = &["outputPath", "output_path"];
    pub const OUTPUT_FILE: &[&str] = &["outputFile", "output_file"];
    pub const EXERCISE_CONFIG_PATH: &[&str] =
        &["exerciseConfigPath", "exercise_config_path", "exercise_config"];
    pub const WRITE_RESULTS: &[&str] = &["writeResults", "write_results"];
    pub const PUTS_SUMMARY: &[&str] = &["putsSummary", "puts_summary"];

    /// 全部可识别键，其余键原样透传给分析器
    pub const ALL: &[&[&str]] = &[
        EXERCISE,
        PATH,
        FILE,
        MODULE,
        OUTPUT_PATH,
        OUTPUT_FILE,
        EXERCISE_CONFIG_PATH,
        WRITE_RESULTS,
        PUTS_SUMMARY,
    ];

    /// 是否为可识别键
    pub fn is_recognized(key: &str) -> bool {
        ALL.iter().any(|aliases| aliases.contains(&key))
    }
}

/// 单次运行的完整参数
#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    /// 练习标识
    pub exercise: String,
    /// 提交根目录
    pub path: String,
    /// 显式指定的源码文件名
    pub file: Option<String>,
    /// 显式指定的分析器模块
    pub module: Option<String>,
    /// 结果输出目录
    pub output_path: String,
    /// 结果文件名
    pub output_file: String,
    /// 练习配置文件路径
    pub exercise_config_path: String,
    /// 是否写入结果文件
    pub write_results: bool,
    /// 是否打印摘要
    pub puts_summary: bool,
    /// 透传给分析器的其它选项
    pub extra: Options,
}

impl RunParams {
    /// 结果文件完整路径
    pub fn output_file_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.output_path).join(&self.output_file)
    }

    /// 读取透传选项
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.extra.get(key)
    }
}
