//! 分析器注册表
//!
//! 内置分析器在编译期登记到 `phf` 表中；调用方还可以在运行时注册自定义实现。
//! 解析失败只返回错误值，不会 panic。

use std::collections::HashMap;
use std::sync::Arc;

use phf::phf_map;

use crate::analyzers::{Analyzer, HelloWorld, TwoFer};
use crate::error::AnalyzerError;

/// 内置分析器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalyzerKind {
    TwoFer,
    HelloWorld,
}

impl AnalyzerKind {
    /// 创建分析器实例
    fn instantiate(self) -> Arc<dyn Analyzer> {
        match self {
            AnalyzerKind::TwoFer => Arc::new(TwoFer),
            AnalyzerKind::HelloWorld => Arc::new(HelloWorld),
        }
    }
}

static BUILTIN_ANALYZERS: phf::Map<&'static str, AnalyzerKind> = phf_map! {
    "TwoFer" => AnalyzerKind::TwoFer,
    "HelloWorld" => AnalyzerKind::HelloWorld,
};

/// 分析器注册表
#[derive(Clone)]
pub struct AnalyzerRegistry {
    namespace: String,
    custom: HashMap<String, Arc<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// 创建只包含内置分析器的注册表
    ///
    /// `namespace` 为引用的命名空间前缀，如 `ElixirAnalyzer.ExerciseTest`
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            custom: HashMap::new(),
        }
    }

    /// 注册自定义分析器（同名时覆盖内置实现）
    pub fn register(&mut self, name: impl Into<String>, analyzer: Arc<dyn Analyzer>) -> &mut Self {
        self.custom.insert(name.into(), analyzer);
        self
    }

    /// 由显式模块名推导分析器引用
    pub fn reference_for_module(&self, module: &str) -> String {
        if self.namespace.is_empty() || module.starts_with(&format!("{}.", self.namespace)) {
            module.to_string()
        } else {
            format!("{}.{}", self.namespace, module)
        }
    }

    /// 解析分析器引用
    pub fn resolve(&self, reference: &str) -> Result<Arc<dyn Analyzer>, AnalyzerError> {
        let name = self.short_name(reference);

        if name.is_empty() {
            return Err(AnalyzerError::UnknownModule {
                reference: reference.to_string(),
            });
        }

        if let Some(analyzer) = self.custom.get(name) {
            return Ok(analyzer.clone());
        }

        BUILTIN_ANALYZERS
            .get(name)
            .map(|kind| kind.instantiate())
            .ok_or_else(|| AnalyzerError::UnknownModule {
                reference: reference.to_string(),
            })
    }

    /// 去掉命名空间前缀
    fn short_name<'a>(&self, reference: &'a str) -> &'a str {
        let reference = reference.trim();
        if self.namespace.is_empty() {
            return reference;
        }
        reference
            .strip_prefix(self.namespace.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(reference)
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new(crate::config::Config::default().module_namespace)
    }
}
