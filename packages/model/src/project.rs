//! Core project snapshot types.
//!
//! Everything here is read-only input to one export run. The engine never
//! creates, mutates, or destroys these entities.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A builder project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A page within a project.
///
/// The slug `"home"` maps to the application root route; every other slug
/// maps to a same-named subpath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// One placed occurrence of a registry component on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: String,

    /// Reference into the component registry.
    pub component_registry_id: String,

    /// Parent instance on the same page; `None` marks a page root.
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Sibling sort key under a shared parent.
    #[serde(default)]
    pub order: i64,

    #[serde(default)]
    pub props: HashMap<String, PropValue>,

    /// CSS property -> value pairs authored in the editor.
    #[serde(default)]
    pub styles: HashMap<String, String>,

    /// Origin group tag, mirroring the registry item's source group.
    #[serde(default)]
    pub source: String,

    /// Raw module source replacing the registry code for this component.
    #[serde(default)]
    pub code_override: Option<String>,

    /// Raw CSS appended to the generated global stylesheet.
    #[serde(default)]
    pub style_override: Option<String>,

    #[serde(default)]
    pub cms_binding: Option<CmsBinding>,
}

/// Binding of an instance prop to a CMS collection field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsBinding {
    pub collection_id: String,
    #[serde(default)]
    pub field_slug: Option<String>,
}

/// A closed prop value.
///
/// Modeled as a tagged enum rather than an open `any` type so attribute
/// serialization is total: every variant has a defined rendering, and
/// `Unsupported` degrades to an explicit marker instead of panicking.
///
/// Variant order matters for untagged deserialization: `Bool` and `Number`
/// must be tried before `Text`, and `null` falls through to `Unsupported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    Map(BTreeMap<String, PropValue>),
    Unsupported,
}

impl PropValue {
    /// True if this value (or any nested value) is `Unsupported`.
    pub fn is_unsupported(&self) -> bool {
        match self {
            PropValue::Unsupported => true,
            PropValue::List(items) => items.iter().any(PropValue::is_unsupported),
            PropValue::Map(entries) => entries.values().any(PropValue::is_unsupported),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Package manager named in the exported README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun install",
        }
    }

    pub fn dev_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Pnpm => "pnpm dev",
            PackageManager::Yarn => "yarn dev",
            PackageManager::Bun => "bun dev",
        }
    }
}

/// Flags for optional output files. Pure configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub include_readme: bool,
    pub include_gitignore: bool,
    pub include_env_example: bool,
    pub package_manager: PackageManager,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_readme: true,
            include_gitignore: true,
            include_env_example: false,
            package_manager: PackageManager::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_value_deserializes_untagged() {
        let value: PropValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(value, PropValue::Text("hello".to_string()));

        let value: PropValue = serde_json::from_str("42.5").unwrap();
        assert_eq!(value, PropValue::Number(42.5));

        let value: PropValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, PropValue::Bool(true));

        let value: PropValue = serde_json::from_str("[1, \"two\"]").unwrap();
        assert_eq!(
            value,
            PropValue::List(vec![
                PropValue::Number(1.0),
                PropValue::Text("two".to_string())
            ])
        );

        let value: PropValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, PropValue::Unsupported);
    }

    #[test]
    fn nested_unsupported_is_detected() {
        let value: PropValue = serde_json::from_str("{\"a\": [null]}").unwrap();
        assert!(value.is_unsupported());

        let value: PropValue = serde_json::from_str("{\"a\": [1]}").unwrap();
        assert!(!value.is_unsupported());
    }

    #[test]
    fn export_options_default_package_manager() {
        let options: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.package_manager, PackageManager::Npm);
        assert!(options.include_readme);
    }
}
