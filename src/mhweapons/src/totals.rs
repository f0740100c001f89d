//! Helpers for small keyed tallies (skill points, weapon counts by type)

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::AddAssign;

/// Render a map as `"key value"` pairs sorted by key, joined with `", "`
pub fn object_as_text<K, V>(map: &HashMap<K, V>) -> String
where
    K: Display + Ord,
    V: Display,
{
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(k, v)| format!("{k} {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Merge `src` into `dst`, summing values for keys present in both
pub fn add_values<K, V>(dst: &mut HashMap<K, V>, src: &HashMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: AddAssign + Copy,
{
    for (k, &v) in src {
        dst.entry(k.clone())
            .and_modify(|existing| *existing += v)
            .or_insert(v);
    }
}
