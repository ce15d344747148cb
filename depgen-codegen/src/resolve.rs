//! Entry resolution for a single dependency group.

use depgen_core::{Combination, OutputFormat, PackageEntry, format_combination};
use depgen_manifest::DependencyGroup;
use tracing::trace;

use crate::{
    Error, Result,
    matrix::matches,
};

/// Collect the raw package entries a group contributes for one format and
/// matrix combination.
///
/// Matching common entries come first, followed by the first matching branch
/// of each matching specific entry, all in declared order. A specific entry
/// with no branch for `combination` fails the resolution: every matrix point
/// must be accounted for explicitly.
pub fn resolve(
    name: &str,
    group: &DependencyGroup,
    format: OutputFormat,
    combination: &Combination,
) -> Result<Vec<PackageEntry>> {
    let mut entries = Vec::new();

    for common in group.common.iter().filter(|e| e.applies_to(format)) {
        entries.extend(common.packages.iter().cloned());
    }

    for specific in group.specific.iter().filter(|e| e.applies_to(format)) {
        let branch = specific
            .matrices
            .iter()
            .find(|branch| matches(combination, &branch.matrix))
            .ok_or_else(|| Error::MatrixCoverage {
                group: name.to_string(),
                combination: combination.clone(),
            })?;

        trace!(
            group = name,
            filter = %format_combination(&branch.matrix),
            packages = branch.packages.len(),
            "matched branch"
        );
        entries.extend(branch.packages.iter().cloned());
    }

    if !format.supports_grouped_entries() {
        if let Some(extra) = entries.iter().flat_map(PackageEntry::group_keys).next() {
            return Err(Error::GroupedExtraUnsupported {
                group: name.to_string(),
                extra: extra.to_string(),
                format,
            });
        }
    }

    Ok(entries)
}
