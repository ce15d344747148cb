//! Deduplication and canonical ordering of resolved entries.

use std::collections::{BTreeMap, BTreeSet};

use depgen_core::PackageEntry;

/// Remove duplicates and sort resolved entries.
///
/// Plain names come first, deduplicated and sorted. All groupings are merged
/// per installer key into a single trailing grouping, present whenever at
/// least one installer key was seen (even one with no names).
pub fn dedupe<I>(entries: I) -> Vec<PackageEntry>
where
    I: IntoIterator<Item = PackageEntry>,
{
    let mut plain = BTreeSet::new();
    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in entries {
        match entry {
            PackageEntry::Plain(name) => {
                plain.insert(name);
            }
            PackageEntry::Grouped(group) => {
                for (key, names) in group {
                    grouped.entry(key).or_default().extend(names);
                }
            }
        }
    }

    let mut result: Vec<PackageEntry> = plain.into_iter().map(PackageEntry::Plain).collect();
    if !grouped.is_empty() {
        result.push(PackageEntry::Grouped(
            grouped
                .into_iter()
                .map(|(key, names)| (key, names.into_iter().collect()))
                .collect(),
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(names: &[&str]) -> Vec<PackageEntry> {
        names.iter().map(|n| PackageEntry::plain(*n)).collect()
    }

    #[test]
    fn test_order_independent() {
        let expected = plain(&["a", "b"]);
        assert_eq!(dedupe(plain(&["b", "a", "a"])), expected);
        assert_eq!(dedupe(plain(&["a", "b", "a"])), expected);
    }

    #[test]
    fn test_grouped_merge() {
        let entries = vec![
            PackageEntry::plain("x"),
            PackageEntry::grouped("pip", ["p2", "p1"]),
            PackageEntry::grouped("pip", ["p1", "p3"]),
        ];

        assert_eq!(
            dedupe(entries),
            vec![
                PackageEntry::plain("x"),
                PackageEntry::grouped("pip", ["p1", "p2", "p3"]),
            ]
        );
    }

    #[test]
    fn test_grouping_always_last() {
        let entries = vec![
            PackageEntry::grouped("pip", ["wheel"]),
            PackageEntry::plain("zlib"),
        ];

        let result = dedupe(entries);
        assert_eq!(result[0], PackageEntry::plain("zlib"));
        assert!(result[1].is_grouped());
    }

    #[test]
    fn test_distinct_keys_combine_into_one_grouping() {
        let entries = vec![
            PackageEntry::grouped("pip", ["b"]),
            PackageEntry::grouped("npm", ["a"]),
        ];

        let mut expected = BTreeMap::new();
        expected.insert("npm".to_string(), vec!["a".to_string()]);
        expected.insert("pip".to_string(), vec!["b".to_string()]);
        assert_eq!(dedupe(entries), vec![PackageEntry::Grouped(expected)]);
    }

    #[test]
    fn test_empty_grouping_is_kept() {
        let result = dedupe(vec![PackageEntry::grouped("pip", Vec::<String>::new())]);
        assert_eq!(result, vec![PackageEntry::grouped("pip", Vec::<String>::new())]);
    }

    #[test]
    fn test_keyless_grouping_is_dropped() {
        let entries = vec![
            PackageEntry::plain("a"),
            PackageEntry::Grouped(BTreeMap::new()),
        ];
        assert_eq!(dedupe(entries), plain(&["a"]));
        assert!(dedupe(vec![PackageEntry::Grouped(BTreeMap::new())]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
