use crate::error::{AppError, AppResult, ConfigError};
use crate::models::exercise::ExerciseConfig;
use std::fs;
use std::path::Path;

/// 从文件加载练习配置（按扩展名选择 JSON 或 TOML）
pub fn load_exercise_config(config_path: &Path) -> AppResult<ExerciseConfig> {
    let path_display = config_path.display().to_string();

    let content = fs::read_to_string(config_path)
        .map_err(|e| AppError::config_read_failed(&path_display, e))?;

    let config = match config_path.extension().and_then(|s| s.to_str()) {
        Some("json") => parse_json(&content, &path_display)?,
        Some("toml") => parse_toml(&content, &path_display)?,
        _ => return Err(ConfigError::UnsupportedFormat { path: path_display }.into()),
    };

    tracing::debug!("成功加载 {} 个练习配置: {}", config.len(), path_display);

    Ok(config)
}

/// 解析 JSON 格式的练习配置
pub fn parse_json(content: &str, path: &str) -> AppResult<ExerciseConfig> {
    serde_json::from_str(content).map_err(|source| {
        ConfigError::JsonParseFailed {
            path: path.to_string(),
            source,
        }
        .into()
    })
}

/// 解析 TOML 格式的练习配置
pub fn parse_toml(content: &str, path: &str) -> AppResult<ExerciseConfig> {
    toml::from_str(content).map_err(|source| {
        ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_config() {
        let file = write_temp(
            ".json",
            r#"{"two-fer": {"codeFile": "two_fer.ex", "analyzerReference": "TwoFer"}}"#,
        );
        let config = load_exercise_config(file.path()).unwrap();
        assert_eq!(config.get("two-fer").unwrap().analyzer_reference, "TwoFer");
    }

    #[test]
    fn test_load_toml_config() {
        let file = write_temp(
            ".toml",
            "[two-fer]\ncode_file = \"two_fer.ex\"\nanalyzer_module = \"TwoFer\"\n",
        );
        let config = load_exercise_config(file.path()).unwrap();
        assert_eq!(config.get("two-fer").unwrap().code_file, "two_fer.ex");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_exercise_config(Path::new("/nonexistent/exercises.json")).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let file = write_temp(".json", "{ not json");
        let err = load_exercise_config(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::JsonParseFailed { .. })));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = write_temp(".yaml", "two-fer: {}");
        let err = load_exercise_config(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::UnsupportedFormat { .. })));
    }
}
