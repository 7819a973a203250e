//! hello-world 练习分析器

use regex::Regex;
use serde_json::Map;

use crate::analyzers::Analyzer;
use crate::error::AnalyzerError;
use crate::models::{templates, Comment, Submission};

const GREETING: &str = "Hello, World!";

/// hello-world 分析器
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl Analyzer for HelloWorld {
    fn name(&self) -> &str {
        "HelloWorld"
    }

    fn analyze(&self, submission: &mut Submission, code: &str) -> Result<(), AnalyzerError> {
        let greeting = Regex::new(&format!(r#""{}""#, regex::escape(GREETING)))?;
        let moduledoc = Regex::new(r"@moduledoc\b")?;

        if !moduledoc.is_match(code) {
            submission.append_comment(templates::SOLUTION_USE_MODULE_DOC, Map::new());
        }

        if greeting.is_match(code) {
            submission.approve();
        } else {
            submission.push_comment(
                Comment::new(templates::HELLO_WORLD_WRONG_GREETING).with_param("expected", GREETING),
            );
            submission.disapprove();
        }

        Ok(())
    }
}
