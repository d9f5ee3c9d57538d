use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use once_cell::unsync::OnceCell;
use resvg::tiny_skia;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::svg::{load_tree, new_pixmap, render_scaled};
use super::{Backend, BackendKind, RenderError};

/// resvg 后端：先渲染一张高分辨率底图，之后每个尺寸都从底图 Lanczos 缩放
pub struct ResvgBackend {
    base_resolution: u32,
    /// 首次渲染时缓存 (源路径, 底图)
    base: OnceCell<(PathBuf, RgbaImage)>,
}

impl ResvgBackend {
    pub fn new(base_resolution: u32) -> Self {
        Self {
            base_resolution,
            base: OnceCell::new(),
        }
    }

    fn render_base(&self, source: &Path) -> Result<RgbaImage, RenderError> {
        let tree = load_tree(source)?;
        let (width, height) = (tree.size().width(), tree.size().height());
        let side = base_side(self.base_resolution, width, height);

        let mut pixmap = new_pixmap(side, side)?;
        render_scaled(&tree, side as f32 / width.max(height), &mut pixmap);
        log::debug!("Rendered {:?} at base resolution {}x{}", source, side, side);

        pixmap_to_rgba(&pixmap)
    }
}

/// 底图边长：不小于文档本身尺寸，也不小于配置的最小分辨率
pub fn base_side(min_side: u32, width: f32, height: f32) -> u32 {
    let natural = width.max(height).ceil();
    if natural.is_finite() && natural > min_side as f32 {
        natural as u32
    } else {
        min_side
    }
}

/// tiny-skia 使用预乘 alpha，转换为普通 RGBA
fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage, RenderError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba).ok_or(RenderError::Surface {
        width: pixmap.width(),
        height: pixmap.height(),
    })
}

fn write_resized(base: &RgbaImage, size: u32, output: &Path) -> Result<(), RenderError> {
    let resized = imageops::resize(base, size, size, FilterType::Lanczos3);

    let mut png_data = Cursor::new(Vec::new());
    resized
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    fs::write(output, png_data.into_inner()).map_err(|e| RenderError::io(output, e))
}

impl Backend for ResvgBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Resvg
    }

    fn is_available(&self) -> bool {
        true
    }

    fn render(&self, source: &Path, size: u32, output: &Path) -> Result<(), RenderError> {
        let (cached_source, base) = self
            .base
            .get_or_try_init(|| -> Result<_, RenderError> {
                Ok((source.to_path_buf(), self.render_base(source)?))
            })?;

        if cached_source != source {
            let fresh = self.render_base(source)?;
            return write_resized(&fresh, size, output);
        }
        write_resized(base, size, output)
    }
}
