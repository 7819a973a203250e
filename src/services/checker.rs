//! 文件检查服务
//!
//! 读取提交的源码文件；读不到时中止提交并留下说明评语，不抛出错误

use std::fs;

use tracing::{debug, warn};

use crate::models::{templates, Comment, Submission};
use crate::utils::logging::truncate_text;

/// 文件检查服务
#[derive(Debug, Default)]
pub struct Checker;

impl Checker {
    pub fn new() -> Self {
        Self
    }

    /// 检查源码文件
    ///
    /// - 成功：附加源码，提交保持未中止
    /// - 失败：中止提交，结论设为不通过，追加 `file_not_found` 评语
    pub fn check(&self, mut submission: Submission) -> Submission {
        let file_path = submission.code_file_path();

        match fs::read_to_string(&file_path) {
            Ok(code) => {
                debug!(
                    "读取源码 {} ({} 字节): {}",
                    file_path.display(),
                    code.len(),
                    truncate_text(&code, 80)
                );
                submission.attach_code(code);
            }
            Err(e) => {
                warn!("⚠️ 无法读取源码 {}: {}", file_path.display(), e);
                let comment = Comment::new(templates::GENERAL_FILE_NOT_FOUND)
                    .with_param("file_name", submission.code_file())
                    .with_param("path", submission.path());
                submission.halt();
                submission.disapprove();
                submission.push_comment(comment);
            }
        }

        submission
    }
}
