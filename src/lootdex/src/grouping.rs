//! Instance bucketing for the instances category
//!
//! Table keys are classified by literal prefix match against a fixed pair
//! list scanned in declared order. The list is not specificity-sorted, so a
//! shorter prefix declared earlier shadows a longer one declared later
//! ("DM" beats "DM2"); that shadowing is load-bearing legacy behavior.

use std::collections::HashMap;

use crate::extract::TableSet;

/// Bucket table keys into named instance groups
///
/// Within a group, keys keep the order they were extracted in. Groups are
/// emitted in the declared order of `prefixes` (first occurrence per
/// instance name; several prefixes may share one), with the `other` bucket
/// last. Buckets that end up empty are omitted, `other` included.
pub fn group_by_instance(
    tables: &TableSet,
    prefixes: &[(&str, &str)],
    other: &str,
) -> Vec<(String, Vec<String>)> {
    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();

    for table in tables.iter() {
        let name = prefixes
            .iter()
            .find(|(prefix, _)| table.key.starts_with(prefix))
            .map_or(other, |(_, name)| *name);
        buckets
            .entry(name.to_string())
            .or_default()
            .push(table.key.clone());
    }

    let mut groups = Vec::new();
    for (_, name) in prefixes {
        if let Some(keys) = buckets.remove(*name) {
            groups.push((name.to_string(), keys));
        }
    }
    if let Some(keys) = buckets.remove(other) {
        groups.push((other.to_string(), keys));
    }

    groups
}
