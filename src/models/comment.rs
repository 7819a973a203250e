//! 评语模型
//!
//! 评语只记录模板标识和参数，具体文案由下游界面渲染

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// 评语模板标识
pub mod templates {
    /// 提交目录中找不到源码文件
    pub const GENERAL_FILE_NOT_FOUND: &str = "elixir.general.file_not_found";
    /// 分析器执行失败，转人工
    pub const GENERAL_ANALYZER_FAILED: &str = "elixir.general.analyzer_failed";
    /// 缺少 @moduledoc
    pub const SOLUTION_USE_MODULE_DOC: &str = "elixir.solution.use_module_doc";

    pub const TWO_FER_USE_DEFAULT_PARAMETER: &str = "elixir.two_fer.use_default_parameter";
    pub const TWO_FER_USE_GUARDS: &str = "elixir.two_fer.use_guards";
    pub const TWO_FER_USE_STRING_INTERPOLATION: &str = "elixir.two_fer.use_string_interpolation";

    pub const HELLO_WORLD_WRONG_GREETING: &str = "elixir.hello_world.wrong_greeting";
}

/// 一条评语：(模板标识, 参数)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 模板标识
    pub comment: String,
    /// 模板参数
    #[serde(default)]
    pub params: Map<String, JsonValue>,
}

impl Comment {
    /// 创建不带参数的评语
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            comment: template.into(),
            params: Map::new(),
        }
    }

    /// 追加一个参数
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
