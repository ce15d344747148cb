//! Matrix types shared by the manifest and the resolver.

use indexmap::IndexMap;

/// Build matrix declared on a file: dimension name to its possible values.
///
/// Declaration order is significant; it drives both expansion order and the
/// file name suffix.
pub type MatrixSpec = IndexMap<String, Vec<String>>;

/// One concrete assignment of a value to each matrix dimension.
///
/// Also used for the partial filters on specific entries.
pub type Combination = IndexMap<String, String>;

/// Format a combination for messages, e.g. `{cuda: 11.5, arch: x86_64}`.
pub fn format_combination(combination: &Combination) -> String {
    let pairs: Vec<String> = combination
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
