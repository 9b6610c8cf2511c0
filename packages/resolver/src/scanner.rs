//! Shallow, regex-based import scanning.
//!
//! Pattern matching over raw source text in place of real module
//! resolution. Tolerant of false positives and false negatives by design;
//! a miss costs one manifest entry, never the export.

use regex::Regex;
use std::collections::BTreeSet;

/// Collect the package names of all non-relative import specifiers in
/// `source`: static imports, side-effect imports, re-exports, and dynamic
/// `import()` calls.
pub fn scan_imports(source: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    let static_import =
        Regex::new(r#"(?m)^\s*import\s+(?:[^'"]+?\s+from\s+)?["']([^"']+)["']"#).unwrap();
    for caps in static_import.captures_iter(source) {
        if let Some(package) = normalize_specifier(&caps[1]) {
            found.insert(package);
        }
    }

    let export_from = Regex::new(r#"(?m)^\s*export\s+[^'"]+?\s+from\s+["']([^"']+)["']"#).unwrap();
    for caps in export_from.captures_iter(source) {
        if let Some(package) = normalize_specifier(&caps[1]) {
            found.insert(package);
        }
    }

    let dynamic_import = Regex::new(r#"import\(\s*["']([^"']+)["']\s*\)"#).unwrap();
    for caps in dynamic_import.captures_iter(source) {
        if let Some(package) = normalize_specifier(&caps[1]) {
            found.insert(package);
        }
    }

    found
}

/// Reduce an import specifier to its package name.
///
/// Relative specifiers and the project path alias return `None`; scoped
/// identifiers keep their first two path segments, bare identifiers keep
/// one (`@radix-ui/react-slot/dist` -> `@radix-ui/react-slot`,
/// `lodash/merge` -> `lodash`).
pub fn normalize_specifier(specifier: &str) -> Option<String> {
    if specifier.starts_with('.') || specifier.starts_with('/') || specifier.starts_with("@/") {
        return None;
    }
    let mut segments = specifier.split('/');
    let first = segments.next().filter(|s| !s.is_empty())?;
    if first.starts_with('@') {
        let second = segments.next().filter(|s| !s.is_empty())?;
        Some(format!("{}/{}", first, second))
    } else {
        Some(first.to_string())
    }
}

/// Detect which shared UI primitives a source references, by import path
/// against the fixed primitives folder.
pub fn scan_primitive_refs(source: &str) -> BTreeSet<String> {
    let primitive_import = Regex::new(r"@/components/ui/([a-z0-9-]+)").unwrap();
    primitive_import
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_static_and_side_effect_imports() {
        let source = r#"
import { motion } from "framer-motion";
import Image from "next/image";
import "./styles.css";
import "mapbox-gl/dist/mapbox-gl.css";
"#;
        let found = scan_imports(source);
        assert!(found.contains("framer-motion"));
        assert!(found.contains("next"));
        assert!(found.contains("mapbox-gl"));
        assert!(!found.iter().any(|p| p.starts_with('.')));
    }

    #[test]
    fn scans_reexports_and_dynamic_imports() {
        let source = r#"
export { default } from "recharts";
const confetti = await import("canvas-confetti");
"#;
        let found = scan_imports(source);
        assert!(found.contains("recharts"));
        assert!(found.contains("canvas-confetti"));
    }

    #[test]
    fn normalizes_scoped_specifiers_to_two_segments() {
        assert_eq!(
            normalize_specifier("@radix-ui/react-slot/dist/index"),
            Some("@radix-ui/react-slot".to_string())
        );
        assert_eq!(
            normalize_specifier("lodash/merge"),
            Some("lodash".to_string())
        );
    }

    #[test]
    fn ignores_relative_and_alias_specifiers() {
        assert_eq!(normalize_specifier("./button"), None);
        assert_eq!(normalize_specifier("../lib/utils"), None);
        assert_eq!(normalize_specifier("/abs/path"), None);
        assert_eq!(normalize_specifier("@/components/ui/button"), None);
        assert_eq!(normalize_specifier("@incomplete"), None);
    }

    #[test]
    fn detects_primitive_references() {
        let source = r#"
import { Button } from "@/components/ui/button";
import { Card, CardContent } from "@/components/ui/card";
import { cn } from "@/lib/utils";
"#;
        let primitives = scan_primitive_refs(source);
        assert_eq!(
            primitives.into_iter().collect::<Vec<_>>(),
            vec!["button".to_string(), "card".to_string()]
        );
    }
}
