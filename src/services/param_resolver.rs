//! 参数解析服务
//!
//! 合并调用方选项与默认值：调用方给出的值永远优先，默认值只补缺失的键。
//! 纯函数，没有失败分支。

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::config::Config;
use crate::models::params::{keys, Options, RunParams};

/// 参数解析服务
pub struct ParamResolver {
    config: Config,
}

impl ParamResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// 生成单次运行的参数
    ///
    /// 类型不符但可以转换的值按转换后的值生效；无法转换的值回退到默认值，
    /// 原始键值放进透传选项，分析器仍能看到调用方给了什么
    pub fn resolve(
        &self,
        exercise: &str,
        input_path: &str,
        output_path: &str,
        options: &Options,
    ) -> RunParams {
        let mut extra: Options = options
            .iter()
            .filter(|(key, _)| !keys::is_recognized(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let mut string_opt = |aliases: &[&str]| string_option(options, aliases, &mut extra);
        let exercise = string_opt(keys::EXERCISE).unwrap_or_else(|| exercise.to_string());
        let path = string_opt(keys::PATH).unwrap_or_else(|| input_path.to_string());
        let file = string_opt(keys::FILE);
        let module = string_opt(keys::MODULE);
        let output_path = string_opt(keys::OUTPUT_PATH).unwrap_or_else(|| output_path.to_string());
        let output_file =
            string_opt(keys::OUTPUT_FILE).unwrap_or_else(|| self.config.output_file.clone());
        let exercise_config_path = string_opt(keys::EXERCISE_CONFIG_PATH)
            .unwrap_or_else(|| self.config.exercise_config_path.clone());

        let write_results = bool_option(options, keys::WRITE_RESULTS, &mut extra).unwrap_or(true);
        let puts_summary = bool_option(options, keys::PUTS_SUMMARY, &mut extra).unwrap_or(true);

        RunParams {
            exercise,
            path,
            file,
            module,
            output_path,
            output_file,
            exercise_config_path,
            write_results,
            puts_summary,
            extra,
        }
    }
}

/// 按别名顺序查找第一个出现的键
fn lookup<'a, 'k>(options: &'a Options, aliases: &[&'k str]) -> Option<(&'k str, &'a JsonValue)> {
    aliases
        .iter()
        .find_map(|alias| options.get(*alias).map(|value| (*alias, value)))
}

/// 字符串选项：数字和布尔值按字面转换为字符串
fn string_option(options: &Options, aliases: &[&str], rejected: &mut Options) -> Option<String> {
    let (key, value) = lookup(options, aliases)?;
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => {
            warn!("选项 {} 应为字符串，实际为 {}，使用默认值", key, other);
            rejected.insert(key.to_string(), other.clone());
            None
        }
    }
}

/// 布尔选项：数字按是否为零转换；字符串接受 true/false、yes/no、on/off、1/0（不区分大小写）
fn bool_option(options: &Options, aliases: &[&str], rejected: &mut Options) -> Option<bool> {
    let (key, value) = lookup(options, aliases)?;
    let parsed = match value {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Number(n) => n.as_f64().map(|n| n != 0.0),
        JsonValue::String(s) => parse_bool_text(s.trim()),
        JsonValue::Null => return None,
        _ => None,
    };
    if parsed.is_none() {
        warn!("选项 {} 应为布尔值，实际为 {}，使用默认值", key, value);
        rejected.insert(key.to_string(), value.clone());
    }
    parsed
}

fn parse_bool_text(text: &str) -> Option<bool> {
    const TRUTHY: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSY: [&str; 4] = ["false", "no", "off", "0"];
    if TRUTHY.iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| text.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}
