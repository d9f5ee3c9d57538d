use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// 渲染流程中的错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No SVG conversion tool available")]
    NoBackend,

    #[error("Invalid icon config: {0}")]
    InvalidConfig(String),

    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse SVG file: {0}")]
    Parse(String),

    #[error("Failed to allocate {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    #[error("Failed to read PNG '{}': {message}", .path.display())]
    InvalidPng { path: PathBuf, message: String },

    #[error("Failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("librsvg failed: {0}")]
    Librsvg(String),
}

impl RenderError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
