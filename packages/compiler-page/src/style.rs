//! Style map serialization.

use std::collections::{BTreeMap, HashMap};

/// Merge an instance's style map into canonical property/value pairs.
///
/// Keys are lowercased and trimmed so case variants of the same property
/// collapse into one entry; when variants collide, the lexicographically
/// later original key wins. Empty keys and values are dropped. The result
/// is alphabetically ordered.
pub fn serialize_styles(styles: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut entries: Vec<(&String, &String)> = styles.iter().collect();
    entries.sort();

    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in entries {
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        merged.insert(key, value.to_string());
    }
    merged.into_iter().collect()
}

/// Convert a CSS property name to the camelCase key convention used by the
/// target's inline style attribute (`font-size` -> `fontSize`).
pub fn to_camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.chars() {
        if c == '-' {
            // A leading hyphen (vendor prefix) does not capitalize.
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
