//! 练习解析服务
//!
//! 只负责定位"源码在哪、由谁分析"，不创建提交记录

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyzers::AnalyzerRegistry;
use crate::config::Config;
use crate::error::{AnalyzerError, AppResult};
use crate::models::{load_exercise_config, RunParams};

/// 解析结果：(源码目录, 源码文件名, 分析器引用)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLocation {
    pub code_path: PathBuf,
    pub code_file: String,
    pub analyzer_reference: String,
}

/// 练习解析服务
pub struct ExerciseResolver {
    code_subdir: String,
}

impl ExerciseResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            code_subdir: config.code_subdir.clone(),
        }
    }

    /// 解析源码位置和分析器引用
    ///
    /// - 未指定 `file`：读练习配置，源码目录为 `<path>/<code_subdir>`
    /// - 指定了 `file`：源码目录即提交目录，分析器由 `module` 推导，不读配置
    ///
    /// 练习配置读取失败返回 `AppError::Config`（致命）；
    /// 练习或模块无法对应时返回 `AppError::Analyzer`（由调用方兜底）
    pub fn resolve(&self, params: &RunParams, registry: &AnalyzerRegistry) -> AppResult<ExerciseLocation> {
        match &params.file {
            None => {
                let config = load_exercise_config(Path::new(&params.exercise_config_path))?;
                let entry = config
                    .get(&params.exercise)
                    .ok_or_else(|| AnalyzerError::UnknownExercise {
                        exercise: params.exercise.clone(),
                    })?;

                debug!(
                    "练习 {} → 文件 {} / 分析器 {}",
                    params.exercise, entry.code_file, entry.analyzer_reference
                );

                Ok(ExerciseLocation {
                    code_path: Path::new(&params.path).join(&self.code_subdir),
                    code_file: entry.code_file.clone(),
                    analyzer_reference: entry.analyzer_reference.clone(),
                })
            }
            Some(file) => {
                let module = params.module.as_deref().unwrap_or_default();
                Ok(ExerciseLocation {
                    code_path: PathBuf::from(&params.path),
                    code_file: file.clone(),
                    analyzer_reference: registry.reference_for_module(module),
                })
            }
        }
    }
}
