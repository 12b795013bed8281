//! Grouping helper

use std::collections::HashMap;
use std::hash::Hash;

/// Partition items by key, keeping input order within each group
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> K,
{
    let mut groups: HashMap<K, Vec<&'a T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}
