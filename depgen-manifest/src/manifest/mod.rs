//! Manifest types and parsing for dependencies.yaml files.

mod dependency;
mod file;
mod files;
mod parse;
mod validate;

use depgen_core::DEFAULT_CHANNELS;
use indexmap::IndexMap;
use serde::Deserialize;

pub use dependency::{CommonEntry, DependencyGroup, MatrixBranch, SpecificEntry};
pub use file::DependenciesYaml;
pub use files::{FileConfig, OutputSpec};
pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Root manifest for dependencies.yaml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Conda channels written to environment files
    #[serde(default)]
    channels: Option<Vec<String>>,

    /// Declared output files, keyed by file name
    pub files: IndexMap<String, FileConfig>,

    /// Dependency groups, keyed by group name
    pub dependencies: IndexMap<String, DependencyGroup>,
}

impl Manifest {
    /// Channels to write, falling back to the defaults when none are declared.
    pub fn channels(&self) -> Vec<String> {
        match &self.channels {
            Some(channels) if !channels.is_empty() => channels.clone(),
            _ => DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Look up a declared file by key.
    pub fn file(&self, key: &str) -> Option<&FileConfig> {
        self.files.get(key)
    }

    /// Look up a dependency group by name.
    pub fn group(&self, name: &str) -> Option<&DependencyGroup> {
        self.dependencies.get(name)
    }

    /// Check if any declared file includes the named group.
    pub fn is_included(&self, group: &str) -> bool {
        self.files
            .values()
            .any(|file| file.includes.iter().any(|name| name == group))
    }
}
