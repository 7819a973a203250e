//! 分析器能力层
//!
//! ## 职责
//!
//! - `Analyzer` - 练习专属的分析能力：读源码，追加评语，给出结论
//! - `registry` - 分析器引用 → 实现 的静态注册表
//!
//! 流水线只通过 `Analyzer` trait 调用分析器，不关心具体规则

pub mod hello_world;
pub mod registry;
pub mod two_fer;

use crate::error::AnalyzerError;
use crate::models::Submission;

pub use hello_world::HelloWorld;
pub use registry::AnalyzerRegistry;
pub use two_fer::TwoFer;

/// 分析器能力
///
/// 实现必须是同步且对合法输入必然返回的；可以追加评语、设置结论。
/// 返回 `Err` 时由调度器兜底转人工。
pub trait Analyzer: Send + Sync {
    /// 分析器名称（用于日志和失败评语）
    fn name(&self) -> &str;

    /// 分析源码
    fn analyze(&self, submission: &mut Submission, code: &str) -> Result<(), AnalyzerError>;
}
