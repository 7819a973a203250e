/// 程序默认配置
///
/// 所有"约定俗成"的默认值都放在这里，通过参数显式传入流水线，不使用全局状态
#[derive(Clone, Debug)]
pub struct Config {
    /// 结果文件名
    pub output_file: String,
    /// 练习配置文件路径
    pub exercise_config_path: String,
    /// 提交目录下存放源码的子目录
    pub code_subdir: String,
    /// 分析器模块命名空间前缀（解析引用时会被去掉）
    pub module_namespace: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: "analysis.json".to_string(),
            exercise_config_path: "config/exercise_config.json".to_string(),
            code_subdir: "lib".to_string(),
            module_namespace: "ElixirAnalyzer.ExerciseTest".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            output_file: std::env::var("ANALYZER_OUTPUT_FILE").unwrap_or(default.output_file),
            exercise_config_path: std::env::var("ANALYZER_EXERCISE_CONFIG").unwrap_or(default.exercise_config_path),
            code_subdir: std::env::var("ANALYZER_CODE_SUBDIR").unwrap_or(default.code_subdir),
            module_namespace: std::env::var("ANALYZER_MODULE_NAMESPACE").unwrap_or(default.module_namespace),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
