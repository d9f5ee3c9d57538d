//! SVG → PNG 渲染后端
//!
//! 所有后端实现同一个 [`Backend`] trait，按固定优先级排列：
//! - `resvg`：先渲染高分辨率底图，再用 Lanczos 缩放到各尺寸
//! - `scene-graph`：解析为 usvg 场景树，直接渲染到目标尺寸
//! - `inkscape`：调用外部 Inkscape 命令行
//! - `librsvg`：librsvg + cairo 直接转换（需要 `librsvg` feature）
//!
//! 每次运行只选用第一个可用的后端。

mod error;
mod inkscape;
#[cfg(feature = "librsvg")]
mod direct;
#[cfg(feature = "resvg")]
mod resample;
#[cfg(feature = "scene-graph")]
mod scene;
#[cfg(any(feature = "resvg", feature = "scene-graph"))]
mod svg;

pub use error::*;
pub use inkscape::*;
#[cfg(feature = "librsvg")]
pub use direct::*;
#[cfg(feature = "resvg")]
pub use resample::*;
#[cfg(feature = "scene-graph")]
pub use scene::*;

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::models::IconConfig;

/// 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    Resvg,
    SceneGraph,
    Inkscape,
    Librsvg,
}

impl BackendKind {
    /// 按优先级排列的全部后端
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Resvg,
        BackendKind::SceneGraph,
        BackendKind::Inkscape,
        BackendKind::Librsvg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Resvg => "resvg",
            BackendKind::SceneGraph => "scene-graph (usvg + tiny-skia)",
            BackendKind::Inkscape => "Inkscape",
            BackendKind::Librsvg => "librsvg",
        }
    }

    /// 缺少该后端时给用户的安装提示
    pub fn install_hint(self) -> &'static str {
        match self {
            BackendKind::Resvg => "resvg (recommended): cargo build --features resvg",
            BackendKind::SceneGraph => "scene-graph renderer: cargo build --features scene-graph",
            BackendKind::Inkscape => "Inkscape: https://inkscape.org/release/",
            BackendKind::Librsvg => {
                "librsvg: install librsvg/cairo development packages, then cargo build --features librsvg"
            }
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一种可替换的 SVG → PNG 渲染策略
pub trait Backend {
    fn kind(&self) -> BackendKind;

    /// 当前主机上是否可用
    fn is_available(&self) -> bool;

    /// 将 `source` 渲染为 `size`×`size` 的 PNG 并写入 `output`
    fn render(&self, source: &Path, size: u32, output: &Path) -> Result<(), RenderError>;

    /// 选中后打印的提示行
    fn banner(&self) -> String {
        format!("Using {} for SVG to PNG conversion", self.kind())
    }
}

/// 按优先级返回第一个可用的后端
pub fn select_backend(backends: &[Box<dyn Backend>]) -> Result<&dyn Backend, RenderError> {
    for backend in backends {
        if backend.is_available() {
            log::info!("Selected SVG backend: {}", backend.kind());
            return Ok(backend.as_ref());
        }
        log::debug!("SVG backend {} not available, trying next", backend.kind());
    }
    Err(RenderError::NoBackend)
}

/// 当前构建启用的全部后端（已按优先级排序）
#[cfg_attr(not(feature = "resvg"), allow(unused_variables))]
pub fn default_backends(config: &IconConfig) -> Vec<Box<dyn Backend>> {
    let mut backends: Vec<Box<dyn Backend>> = Vec::new();

    #[cfg(feature = "resvg")]
    backends.push(Box::new(ResvgBackend::new(config.base_resolution)));

    #[cfg(feature = "scene-graph")]
    backends.push(Box::new(SceneGraphBackend::new()));

    backends.push(Box::new(InkscapeBackend::new()));

    #[cfg(feature = "librsvg")]
    backends.push(Box::new(LibrsvgBackend::new()));

    backends
}

/// 没有任何后端可用时的安装说明
pub fn installation_help() -> String {
    let mut help = String::from(
        "ERROR: No SVG conversion tool available!\nPlease install one of the following:",
    );
    for kind in BackendKind::ALL {
        help.push_str("\n  - ");
        help.push_str(kind.install_hint());
    }
    help
}
