use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Inkscape 在 Windows 上的默认安装位置
pub const INKSCAPE_INSTALL_PATHS: [&str; 2] = [
    r"C:\Program Files\Inkscape\bin\inkscape.exe",
    r"C:\Program Files (x86)\Inkscape\bin\inkscape.exe",
];

/// 查找 Inkscape 可执行文件：先检查默认安装路径，再查 PATH
pub fn find_inkscape() -> Option<PathBuf> {
    if let Some(path) = first_existing(INKSCAPE_INSTALL_PATHS.iter().map(Path::new)) {
        log::debug!("Found Inkscape at install path {:?}", path);
        return Some(path);
    }
    let found = search_path("inkscape");
    if found.is_none() {
        log::debug!("Inkscape not found in install paths or PATH");
    }
    found
}

/// 返回第一个存在的候选文件
pub fn first_existing<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// 在系统 PATH 中查找程序
pub fn search_path(program: &str) -> Option<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} on PATH: {:?}", program, path);
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found on PATH: {}", program, e);
            None
        }
    }
}

/// 在指定的搜索路径（与 PATH 同格式）中查找程序
pub fn search_path_in(program: &str, paths: impl AsRef<OsStr>, cwd: &Path) -> Option<PathBuf> {
    which::which_in(program, Some(paths), cwd).ok()
}
