//! Header sets and last-writer-wins merging.

use std::collections::BTreeMap;

/// Header name → value. Keys are compared case-sensitively.
pub type HeaderSet = BTreeMap<String, String>;

/// Merge `sets` in order; a later set overwrites earlier values for the same key.
///
/// `merge(&[])` is an empty set.
pub fn merge(sets: &[&HeaderSet]) -> HeaderSet {
    let mut merged = HeaderSet::new();
    for set in sets {
        for (key, value) in set.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Bearer authorization plus JSON content type.
pub fn default_headers(token: &str) -> HeaderSet {
    HeaderSet::from([
        ("Authorization".to_owned(), format!("Bearer {token}")),
        ("Content-Type".to_owned(), "application/json".to_owned()),
    ])
}
