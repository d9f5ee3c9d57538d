use crate::models::{output_file_name, GenerationReport, IconConfig, RenderedIcon, TARGET_SIZES};
use crate::render::{default_backends, select_backend, Backend, BackendKind, RenderError};

/// 生成过程中的进度事件
#[derive(Debug)]
pub enum Progress<'a> {
    /// 已选中后端，`banner` 为给用户看的提示行
    BackendSelected { kind: BackendKind, banner: String },
    Created(&'a RenderedIcon),
    /// 某个尺寸失败，剩余尺寸不再生成
    Failed {
        file: String,
        error: &'a RenderError,
    },
}

/// 使用当前构建的全部后端生成图标
pub fn generate_icons<F>(config: &IconConfig, on_progress: F) -> Result<GenerationReport, RenderError>
where
    F: FnMut(Progress<'_>),
{
    generate_icons_from(&default_backends(config), config, on_progress)
}

/// 从给定的后端列表中选出第一个可用的，生成全部尺寸
pub fn generate_icons_from<F>(
    backends: &[Box<dyn Backend>],
    config: &IconConfig,
    mut on_progress: F,
) -> Result<GenerationReport, RenderError>
where
    F: FnMut(Progress<'_>),
{
    config.validate()?;

    let backend = select_backend(backends)?;
    on_progress(Progress::BackendSelected {
        kind: backend.kind(),
        banner: backend.banner(),
    });

    let icons = generate_with(backend, config, on_progress)?;
    Ok(GenerationReport {
        backend: backend.kind(),
        icons,
    })
}

/// 用已选定的后端依次生成每个尺寸，遇到第一个失败即停止
pub fn generate_with<F>(
    backend: &dyn Backend,
    config: &IconConfig,
    mut on_progress: F,
) -> Result<Vec<RenderedIcon>, RenderError>
where
    F: FnMut(Progress<'_>),
{
    let source = config.source_path();
    let mut icons = Vec::with_capacity(TARGET_SIZES.len());

    for size in TARGET_SIZES {
        let output = config.output_path(size);
        let result = backend
            .render(&source, size, &output)
            .and_then(|()| RenderedIcon::from_file(&output));

        match result {
            Ok(icon) => {
                log::info!(
                    "{} rendered {:?} ({}x{}, {} bytes)",
                    backend.kind(),
                    icon.path,
                    icon.width,
                    icon.height,
                    icon.bytes
                );
                on_progress(Progress::Created(&icon));
                icons.push(icon);
            }
            Err(error) => {
                log::error!("Failed to render {}x{} with {}: {}", size, size, backend.kind(), error);
                on_progress(Progress::Failed {
                    file: output_file_name(size),
                    error: &error,
                });
                return Err(error);
            }
        }
    }

    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;

    /// 写出空白 PNG 并记录调用的尺寸，尺寸等于 `fail_at` 时失败
    struct RecordingBackend {
        calls: Rc<RefCell<Vec<u32>>>,
        fail_at: Option<u32>,
    }

    impl Backend for RecordingBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::Inkscape
        }

        fn is_available(&self) -> bool {
            true
        }

        fn render(&self, _source: &Path, size: u32, output: &Path) -> Result<(), RenderError> {
            self.calls.borrow_mut().push(size);
            if self.fail_at == Some(size) {
                return Err(RenderError::Parse("boom".to_string()));
            }
            let file = fs::File::create(output).map_err(|e| RenderError::io(output, e))?;
            let mut encoder = png::Encoder::new(file, size, size);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| RenderError::Encode(e.to_string()))?;
            writer
                .write_image_data(&vec![0u8; (size * size * 4) as usize])
                .map_err(|e| RenderError::Encode(e.to_string()))
        }
    }

    #[test]
    fn test_generate_with_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            fail_at: None,
        };

        let mut lines = Vec::new();
        let icons = generate_with(&backend, &IconConfig::in_dir(dir.path()), |event| {
            if let Progress::Created(icon) = event {
                lines.push(icon.to_string());
            }
        })
        .unwrap();

        assert_eq!(*calls.borrow(), vec![16, 32, 48, 128]);
        assert_eq!(icons.len(), 4);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Created icon16.png (16x16) - "));
        assert!(lines[3].starts_with("Created icon128.png (128x128) - "));
    }

    #[test]
    fn test_generate_with_aborts_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            fail_at: Some(32),
        };

        let mut failed = None;
        let result = generate_with(&backend, &IconConfig::in_dir(dir.path()), |event| {
            if let Progress::Failed { file, .. } = event {
                failed = Some(file);
            }
        });

        assert!(matches!(result, Err(RenderError::Parse(_))));
        assert_eq!(*calls.borrow(), vec![16, 32]);
        assert_eq!(failed.as_deref(), Some("icon32.png"));
        assert!(dir.path().join("icon16.png").exists());
        assert!(!dir.path().join("icon48.png").exists());
    }

    #[test]
    fn test_generate_icons_from_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = IconConfig::in_dir(dir.path());
        config.base_resolution = 0;

        let result = generate_icons_from(&[], &config, |_| {});
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }
}
