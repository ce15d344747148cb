//! Orchestration of a generation run: plan, resolve, render, emit.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use depgen_core::{Combination, File, OutputFormat, PackageEntry, WriteResult};
use depgen_manifest::Manifest;
use tracing::{debug, info};

use crate::{
    Error, Result,
    dedupe::dedupe,
    plan::{OutputMode, PlannedFile, Selection, plan},
    render::render,
    resolve::resolve,
};

/// The deduplicated dependency list for one planned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub file_key: String,
    pub format: OutputFormat,
    pub combination: Combination,
    pub dependencies: Vec<PackageEntry>,
}

/// A rendered file ready to be emitted.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub resolved: ResolvedFile,
    pub path: PathBuf,
    pub content: String,
}

/// Destination for rendered artifacts.
///
/// Artifacts are handed over one at a time as soon as they are rendered, so a
/// failure later in the run leaves earlier artifacts emitted.
pub trait Sink {
    fn accept(&mut self, artifact: Artifact) -> Result<()>;
}

/// Collects artifacts in memory.
impl Sink for Vec<Artifact> {
    fn accept(&mut self, artifact: Artifact) -> Result<()> {
        self.push(artifact);
        Ok(())
    }
}

/// Writes artifacts to their planned paths.
#[derive(Debug, Default)]
pub struct DirectorySink {
    written: Vec<(PathBuf, WriteResult)>,
}

impl DirectorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths handled so far and whether each was rewritten.
    pub fn written(&self) -> &[(PathBuf, WriteResult)] {
        &self.written
    }

    pub fn into_written(self) -> Vec<(PathBuf, WriteResult)> {
        self.written
    }
}

impl Sink for DirectorySink {
    fn accept(&mut self, artifact: Artifact) -> Result<()> {
        let file = File::new(artifact.path, artifact.content);
        let result = file.write().map_err(|source| Error::Write {
            path: file.path().to_path_buf(),
            source,
        })?;
        info!(path = %file.path().display(), ?result, "wrote");
        self.written.push((file.path().to_path_buf(), result));
        Ok(())
    }
}

/// Emits each artifact to a stream, followed by a blank line.
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn accept(&mut self, artifact: Artifact) -> Result<()> {
        writeln!(self.writer, "{}", artifact.content).map_err(Error::Stream)
    }
}

/// Drives a run over a loaded manifest.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    config_path: &'a Path,
    selection: Selection,
    channels: Vec<String>,
}

impl<'a> Generator<'a> {
    /// `config_path` is the path the manifest was read from; output
    /// directories and header comments are derived from it.
    pub fn new(manifest: &'a Manifest, config_path: &'a Path) -> Self {
        Self {
            manifest,
            config_path,
            selection: Selection::all(),
            channels: manifest.channels(),
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Plan the run without resolving anything.
    pub fn plan(&self, mode: OutputMode) -> Result<Vec<PlannedFile>> {
        plan(self.manifest, self.config_path, &self.selection, mode)
    }

    /// Resolve the dependency list of one planned file.
    pub fn resolve(&self, planned: &PlannedFile) -> Result<ResolvedFile> {
        let file = self
            .manifest
            .file(&planned.file_key)
            .ok_or_else(|| Error::UnknownFile {
                file: planned.file_key.clone(),
                available: self
                    .manifest
                    .files
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let mut entries = Vec::new();
        for include in &file.includes {
            let group = self
                .manifest
                .group(include)
                .ok_or_else(|| Error::UnknownGroup {
                    group: include.clone(),
                })?;
            entries.extend(resolve(
                include,
                group,
                planned.format,
                &planned.combination,
            )?);
        }

        Ok(ResolvedFile {
            file_key: planned.file_key.clone(),
            format: planned.format,
            combination: planned.combination.clone(),
            dependencies: dedupe(entries),
        })
    }

    /// Resolve and render every planned file, handing each to `sink` in order.
    ///
    /// Returns the number of artifacts emitted.
    pub fn run(&self, mode: OutputMode, sink: &mut dyn Sink) -> Result<usize> {
        let planned = self.plan(mode)?;
        debug!(count = planned.len(), ?mode, "generating");

        for entry in &planned {
            let resolved = self.resolve(entry)?;
            let content = render(
                entry,
                self.config_path,
                &self.channels,
                &resolved.dependencies,
            )?;
            sink.accept(Artifact {
                resolved,
                path: entry.path(),
                content,
            })?;
        }

        Ok(planned.len())
    }

    /// Render every planned file in memory.
    pub fn preview(&self, mode: OutputMode) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();
        self.run(mode, &mut artifacts)?;
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(names: &[&str]) -> Vec<PackageEntry> {
        names.iter().map(|n| PackageEntry::plain(*n)).collect()
    }

    const MANIFEST: &str = r#"
files:
  all:
    output: [conda, requirements]
    includes: [g1, g2]
dependencies:
  g1:
    common:
      - output_types: [conda, requirements]
        packages: [dep2, dep1, dep1]
  g2:
    common:
      - output_types: requirements
        packages: [dep3, dep2]
"#;

    #[test]
    fn test_resolve_merges_includes() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let generator = Generator::new(&manifest, Path::new("dependencies.yaml"));
        let planned = generator.plan(OutputMode::Stdout).unwrap();

        let conda = generator.resolve(&planned[0]).unwrap();
        assert_eq!(conda.format, OutputFormat::Conda);
        assert_eq!(conda.dependencies, plain(&["dep1", "dep2"]));

        let requirements = generator.resolve(&planned[1]).unwrap();
        assert_eq!(requirements.dependencies, plain(&["dep1", "dep2", "dep3"]));
    }

    #[test]
    fn test_stream_sink_separates_artifacts() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let generator = Generator::new(&manifest, Path::new("dependencies.yaml"))
            .with_selection(Selection::all().output(OutputFormat::Requirements));

        let mut sink = StreamSink::new(Vec::new());
        let count = generator.run(OutputMode::Stdout, &mut sink).unwrap();
        assert_eq!(count, 1);

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.ends_with("dep1\ndep2\ndep3\n\n"));
    }

    #[test]
    fn test_preview_paths() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let generator = Generator::new(&manifest, Path::new("repo/dependencies.yaml"));

        let artifacts = generator.preview(OutputMode::Files).unwrap();
        let paths: Vec<PathBuf> = artifacts.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("repo/conda/environments/all.yaml"),
                PathBuf::from("repo/python/requirements_all.txt"),
            ]
        );
    }
}
