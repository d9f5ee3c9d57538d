use std::path::PathBuf;

use crate::models::output_file_name;
use crate::render::RenderError;

/// 扩展清单要求的图标尺寸（正方形边长，像素）
pub const TARGET_SIZES: [u32; 4] = [16, 32, 48, 128];

/// 源 SVG 的固定文件名
pub const DEFAULT_SOURCE: &str = "icon.svg";

/// resvg 后端高分辨率底图的默认最小边长
pub const DEFAULT_BASE_RESOLUTION: u32 = 512;

/// 图标生成配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    /// 读取源文件、写出 PNG 的目录
    pub work_dir: PathBuf,
    pub source: PathBuf,
    /// resvg 后端先渲染的高分辨率底图最小边长
    pub base_resolution: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            source: PathBuf::from(DEFAULT_SOURCE),
            base_resolution: DEFAULT_BASE_RESOLUTION,
        }
    }
}

impl IconConfig {
    /// 以指定目录为工作目录的默认配置
    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    /// 源 SVG 的完整路径
    pub fn source_path(&self) -> PathBuf {
        self.work_dir.join(&self.source)
    }

    /// 某个尺寸对应的输出路径
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.work_dir.join(output_file_name(size))
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.base_resolution == 0 {
            return Err(RenderError::InvalidConfig(
                "base resolution must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
