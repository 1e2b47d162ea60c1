//! Ordering of dot-separated version names.
//!
//! Comparison is component-wise and numeric: `"1.10" > "1.2"`. A component's
//! value is its leading decimal digits (`"3beta"` → 3, `"rc"` → 0) and missing
//! trailing components count as 0, so `"2"` and `"2.0.0"` compare equal.

use std::cmp::Ordering;

use crate::model::VersionRecord;

/// Compares two version names numerically, component by component.
pub fn compare_version_names(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.').map(component_value);
    let mut right = b.split('.').map(component_value);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ord = l.unwrap_or(0).cmp(&r.unwrap_or(0));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sorts newest first. Stable, so equal versions keep their API order.
pub fn sort_versions_desc(versions: &mut [VersionRecord]) {
    versions.sort_by(|a, b| compare_version_names(&b.version_name, &a.version_name));
}

fn component_value(part: &str) -> u64 {
    let part = part.trim_start();
    let digits = part
        .find(|c: char| !c.is_ascii_digit())
        .map_or(part, |end| &part[..end]);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
