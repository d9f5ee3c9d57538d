use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::render::{BackendKind, RenderError};

/// 按尺寸生成输出文件名，例如 `icon16.png`
pub fn output_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// 已写入磁盘的 PNG 图标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// 文件大小（字节）
    pub bytes: u64,
}

impl RenderedIcon {
    /// 从 PNG 文件头读取实际尺寸
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let file = fs::File::open(path).map_err(|e| RenderError::io(path, e))?;
        let reader = png::Decoder::new(BufReader::new(file))
            .read_info()
            .map_err(|e| RenderError::InvalidPng {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let info = reader.info();
        let (width, height) = (info.width, info.height);

        let bytes = fs::metadata(path)
            .map_err(|e| RenderError::io(path, e))?
            .len();

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            bytes,
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for RenderedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} ({}x{}) - {} bytes",
            self.file_name(),
            self.width,
            self.height,
            self.bytes
        )
    }
}

/// 一次生成的结果
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub backend: BackendKind,
    pub icons: Vec<RenderedIcon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_blank_png(path: &Path, width: u32, height: u32) {
        let file = fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(file, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&vec![0u8; (width * height * 4) as usize])
            .unwrap();
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(16), "icon16.png");
        assert_eq!(output_file_name(128), "icon128.png");
    }

    #[test]
    fn test_from_file_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon32.png");
        write_blank_png(&path, 32, 32);

        let icon = RenderedIcon::from_file(&path).unwrap();
        assert_eq!((icon.width, icon.height), (32, 32));
        assert_eq!(icon.bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(
            icon.to_string(),
            format!("Created icon32.png (32x32) - {} bytes", icon.bytes)
        );
    }

    #[test]
    fn test_from_file_rejects_non_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon16.png");
        fs::write(&path, b"not a png").unwrap();

        assert!(matches!(
            RenderedIcon::from_file(&path),
            Err(RenderError::InvalidPng { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RenderedIcon::from_file(&dir.path().join("icon48.png")),
            Err(RenderError::Io { .. })
        ));
    }
}
