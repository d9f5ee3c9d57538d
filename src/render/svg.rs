use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::RenderError;

/// 读取并解析 SVG 为 usvg 场景树
pub(crate) fn load_tree(source: &Path) -> Result<usvg::Tree, RenderError> {
    let svg_data = fs::read(source).map_err(|e| RenderError::io(source, e))?;

    let mut opt = usvg::Options::default();
    // 相对路径引用的图片以 SVG 所在目录为基准
    opt.resources_dir = fs::canonicalize(source)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_data(&svg_data, &opt)
        .map_err(|e| RenderError::Parse(e.to_string()))?;
    log::debug!(
        "Parsed {:?}: {}x{}",
        source,
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// 创建透明画布
pub(crate) fn new_pixmap(width: u32, height: u32) -> Result<tiny_skia::Pixmap, RenderError> {
    tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })
}

/// 将场景树按统一比例渲染到画布左上角
pub(crate) fn render_scaled(tree: &usvg::Tree, scale: f32, pixmap: &mut tiny_skia::Pixmap) {
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree, transform, &mut pixmap.as_mut());
}

#[cfg(feature = "scene-graph")]
pub(crate) fn write_png(pixmap: &tiny_skia::Pixmap, output: &Path) -> Result<(), RenderError> {
    let png_data = pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    fs::write(output, &png_data).map_err(|e| RenderError::io(output, e))
}
