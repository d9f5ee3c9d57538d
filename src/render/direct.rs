use std::fs::File;
use std::path::Path;

use super::{Backend, BackendKind, RenderError};

/// librsvg + cairo 直接转换：每个尺寸单独加载源文件并写出 PNG
#[derive(Debug, Default)]
pub struct LibrsvgBackend;

impl LibrsvgBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for LibrsvgBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Librsvg
    }

    fn is_available(&self) -> bool {
        true
    }

    fn render(&self, source: &Path, size: u32, output: &Path) -> Result<(), RenderError> {
        let side = i32::try_from(size).map_err(|_| RenderError::Surface {
            width: size,
            height: size,
        })?;

        let handle = rsvg::Loader::new()
            .read_path(source)
            .map_err(|e| RenderError::Librsvg(e.to_string()))?;
        let renderer = rsvg::CairoRenderer::new(&handle);

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, side, side)
            .map_err(|e| RenderError::Librsvg(e.to_string()))?;
        {
            let cr = cairo::Context::new(&surface)
                .map_err(|e| RenderError::Librsvg(e.to_string()))?;
            let viewport = cairo::Rectangle::new(0.0, 0.0, f64::from(size), f64::from(size));
            renderer
                .render_document(&cr, &viewport)
                .map_err(|e| RenderError::Librsvg(e.to_string()))?;
        }

        let mut file = File::create(output).map_err(|e| RenderError::io(output, e))?;
        surface
            .write_to_png(&mut file)
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RenderedIcon;
    use std::fs;

    #[test]
    fn test_render_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.svg");
        fs::write(
            &source,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256" viewBox="0 0 256 256"><circle cx="128" cy="128" r="100" fill="#0078d4"/></svg>"##,
        )
        .unwrap();

        for size in [16, 128] {
            let output = dir.path().join(format!("icon{}.png", size));
            LibrsvgBackend::new().render(&source, size, &output).unwrap();
            let icon = RenderedIcon::from_file(&output).unwrap();
            assert_eq!((icon.width, icon.height), (size, size));
        }
    }
}
