use std::path::Path;

use super::svg::{load_tree, new_pixmap, render_scaled, write_png};
use super::{Backend, BackendKind, RenderError};

/// SVG 未声明尺寸时使用的边长
const FALLBACK_EXTENT: f32 = 128.0;

/// 场景树后端：每个尺寸解析一次，直接渲染到目标大小的透明画布
#[derive(Debug, Default)]
pub struct SceneGraphBackend;

impl SceneGraphBackend {
    pub fn new() -> Self {
        Self
    }
}

/// 文档固有尺寸；宽或高无效时分别回退为 128
///
/// usvg 解析时已将尺寸规整为有限正数（缺省取 viewBox 或 100x100），
/// 这里的回退只在调用方传入其他来源的尺寸时生效。
pub fn intrinsic_size(width: f32, height: f32) -> (f32, f32) {
    let fix = |v: f32| {
        if v.is_finite() && v > 0.0 {
            v
        } else {
            log::warn!("SVG has no usable size ({}), falling back to {}", v, FALLBACK_EXTENT);
            FALLBACK_EXTENT
        }
    };
    (fix(width), fix(height))
}

/// 等比缩放系数 = 目标边长 / max(宽, 高)
pub fn fit_scale(size: u32, width: f32, height: f32) -> f32 {
    size as f32 / width.max(height)
}

impl Backend for SceneGraphBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::SceneGraph
    }

    fn is_available(&self) -> bool {
        true
    }

    fn render(&self, source: &Path, size: u32, output: &Path) -> Result<(), RenderError> {
        let tree = load_tree(source)?;
        let (width, height) = intrinsic_size(tree.size().width(), tree.size().height());

        let mut pixmap = new_pixmap(size, size)?;
        render_scaled(&tree, fit_scale(size, width, height), &mut pixmap);
        write_png(&pixmap, output)
    }
}
