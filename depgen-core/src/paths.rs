//! Lexical path helpers for header comments.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// Path of `path` relative to the directory `base`.
///
/// Relative inputs are resolved against the current directory first. Only
/// the path text is inspected; symlinks are not followed and neither path
/// needs to exist.
pub fn relative_to(path: &Path, base: &Path) -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(relative_path(
        &normalize(&cwd.join(path)),
        &normalize(&cwd.join(base)),
    ))
}

/// Path of `path` relative to `base`, both absolute and normalized.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<Component> = path.components().collect();
    let base: Vec<Component> = base.components().collect();

    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base.len() {
        result.push("..");
    }
    for component in &path[common..] {
        result.push(component.as_os_str());
    }

    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
