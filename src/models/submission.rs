//! 提交记录
//!
//! 一次分析运行中唯一的可变记录，从创建到定论贯穿整条流水线。
//!
//! 状态机：`Created → Checked → Analyzed → 定论`，另有独立的中止标记
//!
//! - 阶段（[`Stage`]）只会前进
//! - 中止标记一旦设置不可撤销；中止与是否已分析互不影响
//! - 评语只能追加，不会被重排或截断
//! - 结论一旦为不通过/转人工，不能再被静默改回通过

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::analyzers::Analyzer;
use crate::error::{AppResult, SubmissionError};
use crate::models::comment::Comment;
use crate::models::report::Report;
use crate::models::verdict::{FinalVerdict, Verdict};

/// 提交所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 刚创建，尚未检查文件
    Created,
    /// 源码已读取
    Checked,
    /// 分析器已执行完毕
    Analyzed,
}

/// 提交记录
pub struct Submission {
    path: String,
    code_path: PathBuf,
    code_file: String,
    analyzer: Option<Arc<dyn Analyzer>>,
    code: Option<String>,
    stage: Stage,
    halted: bool,
    verdict: Verdict,
    comments: Vec<Comment>,
    options: Map<String, JsonValue>,
}

impl Submission {
    /// 创建新的提交记录
    pub fn new(
        path: impl Into<String>,
        code_path: impl Into<PathBuf>,
        code_file: impl Into<String>,
        analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        Self {
            path: path.into(),
            code_path: code_path.into(),
            code_file: code_file.into(),
            analyzer: Some(analyzer),
            code: None,
            stage: Stage::Created,
            halted: false,
            verdict: Verdict::Unset,
            comments: Vec::new(),
            options: Map::new(),
        }
    }

    /// 无法解析分析器时使用的记录：没有分析器，结论直接为不通过
    pub fn unresolved(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            code_path: PathBuf::from(&path),
            path,
            code_file: String::new(),
            analyzer: None,
            code: None,
            stage: Stage::Created,
            halted: false,
            verdict: Verdict::Disapprove,
            comments: Vec::new(),
            options: Map::new(),
        }
    }

    /// 附带透传给分析器的选项
    pub fn with_options(mut self, options: Map<String, JsonValue>) -> Self {
        self.options = options;
        self
    }

    // ========== 只读访问 ==========

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn code_path(&self) -> &Path {
        &self.code_path
    }

    pub fn code_file(&self) -> &str {
        &self.code_file
    }

    /// 源码文件完整路径
    pub fn code_file_path(&self) -> PathBuf {
        self.code_path.join(&self.code_file)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn analyzer(&self) -> Option<Arc<dyn Analyzer>> {
        self.analyzer.clone()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn is_analyzed(&self) -> bool {
        self.stage == Stage::Analyzed
    }

    /// 读取透传选项
    pub fn option(&self, key: &str) -> Option<&JsonValue> {
        self.options.get(key)
    }

    // ========== 状态变更 ==========

    /// 附加源码（检查通过）
    pub fn attach_code(&mut self, code: String) {
        self.code = Some(code);
        if self.stage == Stage::Created {
            self.stage = Stage::Checked;
        }
    }

    /// 中止提交，之后不再运行分析
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// 标记为通过；已有否定性结论时忽略
    pub fn approve(&mut self) {
        if self.verdict.is_adverse() {
            warn!(
                "忽略 approve: 提交 {} 已有结论 {:?}",
                self.path, self.verdict
            );
            return;
        }
        self.verdict = Verdict::Approve;
    }

    /// 标记为不通过
    pub fn disapprove(&mut self) {
        self.verdict = Verdict::Disapprove;
    }

    /// 标记为转人工审核
    pub fn refer(&mut self) {
        self.verdict = Verdict::Refer;
    }

    /// 追加一条评语
    pub fn append_comment(&mut self, template: impl Into<String>, params: Map<String, JsonValue>) {
        self.comments.push(Comment {
            comment: template.into(),
            params,
        });
    }

    /// 追加一条已构造好的评语
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// 标记分析器已执行（不影响中止标记）
    pub fn mark_analyzed(&mut self) {
        self.stage = Stage::Analyzed;
    }

    /// 定出结论：未定时使用 `fallback`，返回最终报告
    pub fn finalize(&mut self, fallback: FinalVerdict) -> Report {
        let status = match self.verdict.resolved() {
            Some(status) => status,
            None => {
                self.verdict = fallback.into();
                fallback
            }
        };
        Report {
            status,
            comments: self.comments.clone(),
        }
    }

    /// 当前报告，结论未定时返回 None
    pub fn report(&self) -> Option<Report> {
        self.verdict.resolved().map(|status| Report {
            status,
            comments: self.comments.clone(),
        })
    }

    /// 序列化为标准 JSON 报告
    pub fn to_json(&self) -> AppResult<String> {
        self.report()
            .ok_or(SubmissionError::Unfinalized)?
            .to_json()
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("path", &self.path)
            .field("code_path", &self.code_path)
            .field("code_file", &self.code_file)
            .field("analyzer", &self.analyzer.as_ref().map(|a| a.name().to_string()))
            .field("has_code", &self.code.is_some())
            .field("stage", &self.stage)
            .field("halted", &self.halted)
            .field("verdict", &self.verdict)
            .field("comments", &self.comments)
            .finish()
    }
}
