//! Component registry interface.
//!
//! The catalog itself lives outside the engine; only the query interface
//! matters here. Registry items are read-only templates carrying their own
//! source and dependency declarations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source groups whose components always need a client-interactivity
/// boundary, regardless of what their source looks like.
pub const ALWAYS_INTERACTIVE_GROUPS: &[&str] = &["animations"];

/// True if `group` belongs to the always-interactive list.
pub fn is_always_interactive(group: &str) -> bool {
    ALWAYS_INTERACTIVE_GROUPS.contains(&group)
}

/// An explicit, pinned package+version pair attached to a registry item.
/// Takes precedence over generic name-based resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedDependency {
    pub package: String,
    pub version: String,
}

/// A prop declared by a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDecl {
    pub name: String,
    #[serde(default)]
    pub prop_type: String,
    #[serde(default)]
    pub required: bool,
}

/// A reusable component template available to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub id: String,

    /// Display name; the generated import identifier derives from this.
    pub name: String,

    /// Source group tag (`"ui"`, `"blocks"`, `"animations"`, ...).
    #[serde(default)]
    pub source: String,

    /// Flat dependency names, resolved through the canonical version table.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Pinned manifest; used verbatim when present.
    #[serde(default)]
    pub dependency_manifest: Option<Vec<PinnedDependency>>,

    /// Embedded fallback source, used when no fetched source is available.
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub props: Vec<PropDecl>,

    /// Output path hint relative to the project root, e.g.
    /// `components/blocks/hero.tsx`.
    #[serde(default)]
    pub module_path: Option<String>,
}

/// Query interface over the component catalog.
pub trait ComponentRegistry {
    fn get_by_id(&self, id: &str) -> Option<&RegistryItem>;
}

/// Registry backed by an in-memory map. Used by the CLI (inline snapshot
/// registry) and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    items: HashMap<String, RegistryItem>,
}

impl InMemoryRegistry {
    pub fn new(items: Vec<RegistryItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id.clone(), item)).collect(),
        }
    }
}

impl ComponentRegistry for InMemoryRegistry {
    fn get_by_id(&self, id: &str) -> Option<&RegistryItem> {
        self.items.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let registry = InMemoryRegistry::new(vec![RegistryItem {
            id: "hero".to_string(),
            name: "Hero Section".to_string(),
            source: "blocks".to_string(),
            dependencies: vec![],
            dependency_manifest: None,
            code: String::new(),
            props: vec![],
            module_path: None,
        }]);

        assert!(registry.get_by_id("hero").is_some());
        assert!(registry.get_by_id("missing").is_none());
    }

    #[test]
    fn always_interactive_groups() {
        assert!(is_always_interactive("animations"));
        assert!(!is_always_interactive("blocks"));
        assert!(!is_always_interactive("ui"));
    }
}
