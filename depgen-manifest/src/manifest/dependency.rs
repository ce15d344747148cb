//! Dependency groups and their entries.

use depgen_core::{Combination, OutputFormat, PackageEntry};
use serde::Deserialize;

use crate::serde_helpers::{deserialize_filter, deserialize_output_types, null_as_default};

/// A named set of dependencies that files include.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyGroup {
    /// Entries applied to every matrix combination
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: Vec<CommonEntry>,

    /// Entries conditioned on the matrix combination
    #[serde(default, deserialize_with = "null_as_default")]
    pub specific: Vec<SpecificEntry>,
}

impl DependencyGroup {
    /// Iterate over every package entry of the group, regardless of format or matrix.
    pub fn packages(&self) -> impl Iterator<Item = &PackageEntry> {
        let common = self.common.iter().flat_map(|e| e.packages.iter());
        let specific = self
            .specific
            .iter()
            .flat_map(|e| e.matrices.iter())
            .flat_map(|b| b.packages.iter());
        common.chain(specific)
    }
}

/// Packages applied unconditionally for the listed formats.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonEntry {
    #[serde(deserialize_with = "deserialize_output_types")]
    pub output_types: Vec<OutputFormat>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<PackageEntry>,
}

impl CommonEntry {
    pub fn applies_to(&self, format: OutputFormat) -> bool {
        self.output_types.contains(&format)
    }
}

/// Packages selected by matching the matrix combination against branches.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecificEntry {
    #[serde(deserialize_with = "deserialize_output_types")]
    pub output_types: Vec<OutputFormat>,

    /// Branches, tried in order; the first match wins
    pub matrices: Vec<MatrixBranch>,
}

impl SpecificEntry {
    pub fn applies_to(&self, format: OutputFormat) -> bool {
        self.output_types.contains(&format)
    }
}

/// A partial matrix filter and the packages it selects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixBranch {
    /// Required dimension values; empty matches every combination
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub matrix: Combination,

    /// Packages for this branch; empty means "nothing for this combination"
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<PackageEntry>,
}
