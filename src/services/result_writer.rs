//! 结果写入服务
//!
//! 只负责把报告写到 `<outputPath>/<outputFile>`，不关心流程

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Report, RunParams};

/// 报告文件权限：属主读写，其他用户只读
#[cfg(unix)]
const REPORT_MODE: u32 = 0o644;

/// 结果写入服务
///
/// 先写入同目录下的临时文件再整体替换目标文件，不会留下写了一半的报告。
/// 临时文件默认只有属主可读，替换前放宽为 [`REPORT_MODE`]
#[derive(Debug, Default)]
pub struct ResultWriter;

impl ResultWriter {
    pub fn new() -> Self {
        Self
    }

    /// 按参数写入报告；`writeResults` 关闭时不做任何 I/O
    ///
    /// # 返回
    /// 写入时返回 true
    pub fn write(&self, report: &Report, params: &RunParams) -> AppResult<bool> {
        if !params.write_results {
            debug!("writeResults 已关闭，跳过写入");
            return Ok(false);
        }

        let target = params.output_file_path();
        self.write_to(report, &target)?;
        info!("✓ 分析结果已写入 {}", target.display());

        Ok(true)
    }

    /// 原子写入报告到指定文件，覆盖已有文件
    pub fn write_to(&self, report: &Report, target: &Path) -> AppResult<()> {
        let json = report.to_json()?;
        let path_display = target.display().to_string();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file =
            NamedTempFile::new_in(dir).map_err(|e| AppError::file_write_failed(&path_display, e))?;
        file.write_all(json.as_bytes())
            .and_then(|_| set_report_permissions(file.as_file()))
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| AppError::file_write_failed(&path_display, e))?;
        file.persist(target)
            .map_err(|e| AppError::file_write_failed(&path_display, e.error))?;

        Ok(())
    }
}

#[cfg(unix)]
fn set_report_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(REPORT_MODE))
}

#[cfg(not(unix))]
fn set_report_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
