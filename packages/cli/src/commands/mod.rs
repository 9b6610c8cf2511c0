mod export;
mod preview;

pub use export::{export, ExportArgs};
pub use preview::{preview, PreviewArgs};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use weaver_exporter::ExportInput;
use weaver_model::{PackageManager, RegistryItem};

/// One self-contained project snapshot: the export input plus the inline
/// registry catalog it references.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub input: ExportInput,
    #[serde(default)]
    pub registry: Vec<RegistryItem>,
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid snapshot JSON: {}", path.display()))
}

pub fn parse_package_manager(label: &str) -> Result<PackageManager> {
    match label {
        "npm" => Ok(PackageManager::Npm),
        "pnpm" => Ok(PackageManager::Pnpm),
        "yarn" => Ok(PackageManager::Yarn),
        "bun" => Ok(PackageManager::Bun),
        other => bail!("unknown package manager: {} (use npm, pnpm, yarn, or bun)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_snapshot_with_inline_registry() {
        let json = r#"{
            "project": { "id": "p1", "name": "Demo Site" },
            "pages": [{ "id": "home-id", "slug": "home", "name": "Home" }],
            "instances": {
                "home-id": [{ "id": "a", "component_registry_id": "heading" }]
            },
            "registry": [{ "id": "hero", "name": "Hero", "source": "blocks" }]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.input.project.name, "Demo Site");
        assert_eq!(snapshot.input.pages.len(), 1);
        assert_eq!(snapshot.registry.len(), 1);
        assert!(snapshot.input.collections.is_empty());
    }

    #[test]
    fn rejects_unknown_package_manager() {
        assert!(parse_package_manager("pnpm").is_ok());
        assert!(parse_package_manager("cargo").is_err());
    }
}
