//! two-fer 练习分析器
//!
//! 期望解法：
//!
//! ```elixir
//! def two_fer(name \\ "you") when is_binary(name), do: "One for #{name}, one for me"
//! ```

use regex::Regex;
use serde_json::Map;

use crate::analyzers::Analyzer;
use crate::error::AnalyzerError;
use crate::models::{templates, Submission};

/// two-fer 分析器
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoFer;

/// (规则表达式, 缺失时的评语, 是否为必须项)
const RULES: &[(&str, &str, bool)] = &[
    (
        r#"\\\\\s*"you""#,
        templates::TWO_FER_USE_DEFAULT_PARAMETER,
        true,
    ),
    (r"when\s+is_binary\(", templates::TWO_FER_USE_GUARDS, true),
    (
        r"#\{[^}]+\}",
        templates::TWO_FER_USE_STRING_INTERPOLATION,
        true,
    ),
    (r"@moduledoc\b", templates::SOLUTION_USE_MODULE_DOC, false),
];

impl Analyzer for TwoFer {
    fn name(&self) -> &str {
        "TwoFer"
    }

    fn analyze(&self, submission: &mut Submission, code: &str) -> Result<(), AnalyzerError> {
        let mut essential_missing = false;

        for (pattern, template, essential) in RULES {
            if !Regex::new(pattern)?.is_match(code) {
                submission.append_comment(*template, Map::new());
                essential_missing |= *essential;
            }
        }

        if essential_missing {
            submission.disapprove();
        } else {
            submission.approve();
        }

        Ok(())
    }
}
