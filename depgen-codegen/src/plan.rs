//! Planning which files a run produces and where they go.

use std::path::{Path, PathBuf};

use depgen_core::{Combination, OutputFormat};
use depgen_manifest::{FileConfig, Manifest};
use tracing::debug;

use crate::{Error, Result, matrix::expand};

/// Where generated artifacts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write each artifact to its file under the configuration directory.
    #[default]
    Files,
    /// Emit every artifact to a single stream; nothing touches the filesystem.
    Stdout,
}

/// Narrows a run to part of the manifest.
///
/// `output` replaces each file's declared formats and `matrix` replaces its
/// matrix with a single combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub file_key: Option<String>,
    pub output: Option<OutputFormat>,
    pub matrix: Option<Combination>,
}

impl Selection {
    /// Select every declared file as configured.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn file(mut self, key: impl Into<String>) -> Self {
        self.file_key = Some(key.into());
        self
    }

    pub fn output(mut self, format: OutputFormat) -> Self {
        self.output = Some(format);
        self
    }

    pub fn matrix(mut self, combination: Combination) -> Self {
        self.matrix = Some(combination);
        self
    }
}

/// One artifact to produce: a (file, format, combination) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub file_key: String,
    pub format: OutputFormat,
    pub combination: Combination,
    /// File name including extension
    pub file_name: String,
    /// Directory the file lands in (`.` in stdout mode)
    pub output_dir: PathBuf,
}

impl PlannedFile {
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// The file name without its extension, used as the conda environment name.
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(self.format.extension())
            .unwrap_or(&self.file_name)
    }
}

/// Build the file name for a format, file key and combination.
///
/// ```
/// # use depgen_codegen::file_name;
/// # use depgen_core::{Combination, OutputFormat};
/// let mut combo = Combination::new();
/// combo.insert("cuda".into(), "11.5".into());
/// combo.insert("arch".into(), "x86_64".into());
/// assert_eq!(
///     file_name(OutputFormat::Requirements, "all", &combo),
///     "requirements_all_cuda-115_arch-x86_64.txt"
/// );
/// ```
pub fn file_name(format: OutputFormat, file_key: &str, combination: &Combination) -> String {
    let suffix = combination
        .iter()
        .map(|(dim, value)| format!("{}-{}", dim, value))
        .collect::<Vec<_>>()
        .join("_");

    let stem = [format.file_prefix().unwrap_or(""), file_key, &suffix]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .replace('.', "");

    format!("{}{}", stem, format.extension())
}

/// Directory the configuration file lives in, `.` for a bare file name.
pub fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Expand the manifest into the ordered list of artifacts to produce.
///
/// Files are visited in declared order, then their formats, then their matrix
/// combinations.
pub fn plan(
    manifest: &Manifest,
    config_path: &Path,
    selection: &Selection,
    mode: OutputMode,
) -> Result<Vec<PlannedFile>> {
    let selected: Vec<(&String, &FileConfig)> = match &selection.file_key {
        Some(key) => {
            let (key, file) =
                manifest
                    .files
                    .get_key_value(key)
                    .ok_or_else(|| Error::UnknownFile {
                        file: key.clone(),
                        available: manifest
                            .files
                            .keys()
                            .map(String::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                    })?;
            vec![(key, file)]
        }
        None => manifest.files.iter().collect(),
    };

    let mut planned = Vec::new();
    for (key, file) in selected {
        let formats = match selection.output {
            Some(OutputFormat::None) => Vec::new(),
            Some(format) => vec![format],
            None => file.output.formats().map_err(|source| Error::InvalidOutput {
                file: key.clone(),
                source,
            })?,
        };

        let combinations: Vec<Combination> = match &selection.matrix {
            Some(combination) => vec![combination.clone()],
            None => expand(&file.matrix).collect(),
        };

        for format in formats {
            let output_dir = match mode {
                OutputMode::Files => config_dir(config_path).join(file.output_dir(format)),
                OutputMode::Stdout => PathBuf::from("."),
            };

            for combination in &combinations {
                let entry = PlannedFile {
                    file_key: key.clone(),
                    format,
                    combination: combination.clone(),
                    file_name: file_name(format, key, combination),
                    output_dir: output_dir.clone(),
                };
                debug!(path = %entry.path().display(), "planned");
                planned.push(entry);
            }
        }
    }

    Ok(planned)
}
