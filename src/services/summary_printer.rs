//! 摘要输出服务 - 纯展示，不修改提交

use std::fmt::Write as _;

use crate::models::{Report, RunParams};

/// 摘要输出服务
#[derive(Debug, Default)]
pub struct SummaryPrinter;

impl SummaryPrinter {
    pub fn new() -> Self {
        Self
    }

    /// 渲染摘要文本
    pub fn render(&self, report: &Report, params: &RunParams) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "📋 分析摘要");
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "练习: {}", params.exercise);
        let _ = writeln!(out, "路径: {}", params.path);
        let _ = writeln!(out, "结论: {}", report.status);
        let _ = writeln!(out, "评语: {} 条", report.comments.len());

        for (i, comment) in report.comments.iter().enumerate() {
            if comment.params.is_empty() {
                let _ = writeln!(out, "  {}. {}", i + 1, comment.comment);
            } else {
                let params = serde_json::Value::Object(comment.params.clone());
                let _ = writeln!(out, "  {}. {} {}", i + 1, comment.comment, params);
            }
        }

        if params.write_results {
            let _ = writeln!(out, "输出: {}", params.output_file_path().display());
        }
        let _ = write!(out, "{}", "=".repeat(60));

        out
    }

    /// `putsSummary` 开启时打印摘要到标准输出
    pub fn print(&self, report: &Report, params: &RunParams) {
        if params.puts_summary {
            println!("{}", self.render(report, params));
        }
    }
}
