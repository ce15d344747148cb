//! Generate operation - resolve and emit dependency files.

use std::io::Write;

use depgen_codegen::{DirectorySink, Generator, OutputMode, Result, Selection, StreamSink};
use depgen_core::WriteResult;
use depgen_manifest::DependenciesYaml;
use tracing::info;

use crate::reports::{FileStatus, GenerateReport, GeneratedFile};

/// Write every selected file to its output directory.
pub fn generate(config: &DependenciesYaml, selection: Selection) -> Result<GenerateReport> {
    let mut sink = DirectorySink::new();
    Generator::new(config.manifest(), config.path())
        .with_selection(selection)
        .run(OutputMode::Files, &mut sink)?;

    let files: Vec<GeneratedFile> = sink
        .into_written()
        .into_iter()
        .map(|(path, result)| GeneratedFile {
            path,
            status: match result {
                WriteResult::Written => FileStatus::Written,
                WriteResult::Unchanged => FileStatus::Unchanged,
            },
        })
        .collect();
    info!(count = files.len(), "generation finished");

    Ok(GenerateReport {
        config_path: config.path().to_path_buf(),
        files,
    })
}

/// Resolve and render every selected file without writing anything.
pub fn preview(
    config: &DependenciesYaml,
    selection: Selection,
    mode: OutputMode,
) -> Result<GenerateReport> {
    let artifacts = Generator::new(config.manifest(), config.path())
        .with_selection(selection)
        .preview(mode)?;

    Ok(GenerateReport {
        config_path: config.path().to_path_buf(),
        files: artifacts
            .into_iter()
            .map(|artifact| GeneratedFile {
                path: artifact.path,
                status: FileStatus::Planned,
            })
            .collect(),
    })
}

/// Emit every selected file to `writer`, each followed by a blank line.
pub fn generate_to_stream<W: Write>(
    config: &DependenciesYaml,
    selection: Selection,
    writer: W,
) -> Result<usize> {
    let mut sink = StreamSink::new(writer);
    Generator::new(config.manifest(), config.path())
        .with_selection(selection)
        .run(OutputMode::Stdout, &mut sink)
}
