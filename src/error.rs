use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 练习配置错误（部署问题，直接向上抛出）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 分析器解析或执行错误
    #[error("分析器错误: {0}")]
    Analyzer(#[from] AnalyzerError),
    /// 提交记录状态错误
    #[error("提交错误: {0}")]
    Submission(#[from] SubmissionError),
}

/// 练习配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取练习配置失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 不支持的配置文件格式
    #[error("不支持的练习配置格式: {path}")]
    UnsupportedFormat { path: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 写入结果文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 序列化结果失败
    #[error("序列化结果失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// 分析器错误
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// 练习配置中没有该练习
    #[error("未知练习: {exercise}")]
    UnknownExercise { exercise: String },
    /// 分析器引用无法解析到已注册的实现
    #[error("无法解析分析器: {reference}")]
    UnknownModule { reference: String },
    /// 分析器规则的正则表达式无效
    #[error("规则表达式无效: {0}")]
    Pattern(#[from] regex::Error),
    /// 分析器执行失败
    #[error("分析器 {analyzer} 执行失败: {message}")]
    Failed { analyzer: String, message: String },
}

/// 提交记录状态错误
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 尚未定出结论就尝试输出
    #[error("提交尚未定出结论，不能输出报告")]
    Unfinalized,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建配置读取错误
    pub fn config_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Config(ConfigError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

impl AnalyzerError {
    /// 创建分析器执行失败错误
    pub fn failed(analyzer: impl Into<String>, message: impl Into<String>) -> Self {
        AnalyzerError::Failed {
            analyzer: analyzer.into(),
            message: message.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
