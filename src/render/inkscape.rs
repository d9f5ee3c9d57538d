use once_cell::unsync::OnceCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{Backend, BackendKind, RenderError};
use crate::utils::find_inkscape;

/// 外部 Inkscape 命令行后端，每个尺寸调用一次
pub struct InkscapeBackend {
    /// 首次探测时才查找可执行文件
    executable: OnceCell<Option<PathBuf>>,
}

impl InkscapeBackend {
    pub fn new() -> Self {
        Self {
            executable: OnceCell::new(),
        }
    }

    /// 使用指定的可执行文件，跳过查找
    pub fn with_executable(path: Option<PathBuf>) -> Self {
        Self {
            executable: OnceCell::with_value(path),
        }
    }

    pub fn executable(&self) -> Option<&Path> {
        self.executable
            .get_or_init(find_inkscape)
            .as_deref()
    }
}

impl Default for InkscapeBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// 导出单个尺寸 PNG 的命令行参数
pub fn export_args(source: &Path, output: &Path, size: u32) -> Vec<OsString> {
    let mut export_filename = OsString::from("--export-filename=");
    export_filename.push(output);

    vec![
        source.as_os_str().to_os_string(),
        export_filename,
        OsString::from(format!("--export-width={}", size)),
        OsString::from(format!("--export-height={}", size)),
        OsString::from("--export-type=png"),
    ]
}

impl Backend for InkscapeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Inkscape
    }

    fn is_available(&self) -> bool {
        self.executable().is_some()
    }

    fn banner(&self) -> String {
        match self.executable() {
            Some(path) => format!("Using Inkscape: {}", path.display()),
            None => "Using Inkscape".to_string(),
        }
    }

    fn render(&self, source: &Path, size: u32, output: &Path) -> Result<(), RenderError> {
        let exe = self.executable().ok_or(RenderError::NoBackend)?;
        let tool = exe.display().to_string();

        let mut cmd = Command::new(exe);
        cmd.args(export_args(source, output, size))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        log::debug!("Running {} for {}x{}", tool, size, size);
        let out = cmd.output().map_err(|e| RenderError::ToolLaunch {
            tool: tool.clone(),
            source: e,
        })?;

        if !out.status.success() {
            return Err(RenderError::ToolFailed {
                tool,
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
