//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What happened to a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    /// Existing content already matched.
    Unchanged,
    /// Dry run; nothing was written.
    Planned,
}

#[derive(Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Report data from a generate run in file mode.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl GenerateReport {
    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.files.is_empty() {
            out.warning(&format!(
                "no files generated from {}",
                self.config_path.display()
            ));
            return;
        }

        for file in &self.files {
            let path = file.path.display().to_string();
            match file.status {
                FileStatus::Written => out.added_item(&path),
                FileStatus::Unchanged => out.list_item(&format!("{} (unchanged)", path)),
                FileStatus::Planned => out.list_item(&path),
            }
        }
        out.newline();

        let planned = self.count(FileStatus::Planned);
        if planned > 0 {
            out.key_value("Would generate", &format!("{} file(s)", planned));
        } else {
            out.key_value(
                "Generated",
                &format!(
                    "{} file(s), {} unchanged",
                    self.files.len(),
                    self.count(FileStatus::Unchanged)
                ),
            );
        }
    }
}
