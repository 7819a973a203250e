//! 练习配置
//!
//! 练习标识 → {源码文件名, 分析器引用}，每次运行加载一次，之后只读

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 单个练习的配置项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseConfigEntry {
    /// 源码文件名（位于提交目录的 lib 子目录下）
    #[serde(rename = "codeFile", alias = "code_file")]
    pub code_file: String,
    /// 分析器引用
    #[serde(
        rename = "analyzerReference",
        alias = "analyzer_reference",
        alias = "analyzer_module"
    )]
    pub analyzer_reference: String,
}

/// 全部练习配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseConfig {
    entries: BTreeMap<String, ExerciseConfigEntry>,
}

impl ExerciseConfig {
    /// 查找练习配置
    pub fn get(&self, exercise: &str) -> Option<&ExerciseConfigEntry> {
        self.entries.get(exercise)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
