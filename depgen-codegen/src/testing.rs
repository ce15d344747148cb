//! Test utilities for generation runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    io,
    path::{Path, PathBuf},
};

use depgen_core::DEFAULT_CONFIG_FILE;
use tempfile::TempDir;

/// A configuration file written into a fresh temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    dir: TempDir,
    config_path: PathBuf,
}

impl Fixture {
    /// Write `config` as `dependencies.yaml` in a new temporary directory.
    pub fn new(config: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, config)?;
        Ok(Self { dir, config_path })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read a generated file, relative to the fixture root.
    pub fn read(&self, relative: impl AsRef<Path>) -> io::Result<String> {
        std::fs::read_to_string(self.root().join(relative))
    }

    /// All files under the fixture root except the configuration, relative
    /// and sorted.
    pub fn generated_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_files(self.root(), self.root(), &mut files)?;
        files.retain(|path| path != Path::new(DEFAULT_CONFIG_FILE));
        files.sort();
        Ok(files)
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(())
}
