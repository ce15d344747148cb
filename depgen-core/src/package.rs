//! Package entries as written in dependency lists.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A single element of a dependency list.
///
/// Entries are either plain package names (`numpy>=1.21`) or a grouping of
/// packages installed through a secondary installer:
///
/// ```yaml
/// - pip:
///     - some-wheel
/// ```
///
/// Groupings written by users hold a single key. The deduplicator may combine
/// several keys into one grouping; keys are kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    /// A plain package name or spec
    Plain(String),
    /// Packages keyed by the installer that handles them
    Grouped(BTreeMap<String, Vec<String>>),
}

impl PackageEntry {
    /// Create a plain entry.
    pub fn plain(name: impl Into<String>) -> Self {
        PackageEntry::Plain(name.into())
    }

    /// Create a grouping with a single installer key.
    pub fn grouped<I, S>(key: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = BTreeMap::new();
        group.insert(key.into(), names.into_iter().map(Into::into).collect());
        PackageEntry::Grouped(group)
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, PackageEntry::Grouped(_))
    }

    /// Installer keys of a grouping (empty for plain entries).
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        let keys = match self {
            PackageEntry::Plain(_) => None,
            PackageEntry::Grouped(group) => Some(group.keys().map(String::as_str)),
        };
        keys.into_iter().flatten()
    }
}

impl From<&str> for PackageEntry {
    fn from(name: &str) -> Self {
        PackageEntry::plain(name)
    }
}

impl From<String> for PackageEntry {
    fn from(name: String) -> Self {
        PackageEntry::Plain(name)
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageEntry::Plain(name) => write!(f, "{}", name),
            PackageEntry::Grouped(group) => {
                let parts: Vec<String> = group
                    .iter()
                    .map(|(key, names)| format!("{}: [{}]", key, names.join(", ")))
                    .collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}
