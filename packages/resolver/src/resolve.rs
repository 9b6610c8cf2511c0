//! Dependency resolution.
//!
//! Aggregates and pins every package the exported project needs. The
//! result maps are BTreeMaps keyed by package name, so resolution is
//! idempotent and independent of input iteration order.
//!
//! Precedence per package: pinned manifest entries are used verbatim and
//! may overwrite earlier inserts (a later manifest wins over an earlier
//! one); table- and default-resolved entries never overwrite an existing
//! pin.

use crate::scanner::{scan_imports, scan_primitive_refs};
use crate::versions::{
    is_framework_internal, pinned_or_default, primitive_peer_dependencies,
    BASELINE_DEPENDENCIES, BASELINE_DEV_DEPENDENCIES, CLIENT_RUNTIME_DEPENDENCY,
    DEFAULT_PRIMITIVES,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use weaver_model::{is_always_interactive, ComponentRegistry};

/// Resolved package manifest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Resolve the full dependency set for the given used registry ids.
pub fn resolve(used_ids: &BTreeSet<String>, registry: &dyn ComponentRegistry) -> Resolution {
    let mut dependencies: BTreeMap<String, String> = BTreeMap::new();
    let mut dev_dependencies: BTreeMap<String, String> = BTreeMap::new();

    for (package, version) in BASELINE_DEPENDENCIES {
        dependencies.insert((*package).to_string(), (*version).to_string());
    }
    for (package, version) in BASELINE_DEV_DEPENDENCIES {
        dev_dependencies.insert((*package).to_string(), (*version).to_string());
    }

    let mut needs_client_runtime = false;

    for id in used_ids {
        let item = match registry.get_by_id(id) {
            Some(item) => item,
            None => {
                tracing::debug!(id = %id, "skipping unresolved registry id");
                continue;
            }
        };

        if is_always_interactive(&item.source) {
            needs_client_runtime = true;
        }

        match &item.dependency_manifest {
            Some(manifest) => {
                for pinned in manifest {
                    dependencies.insert(pinned.package.clone(), pinned.version.clone());
                }
            }
            None => {
                for name in &item.dependencies {
                    dependencies
                        .entry(name.clone())
                        .or_insert_with(|| pinned_or_default(name).to_string());
                }
            }
        }

        for package in scan_imports(&item.code) {
            if is_framework_internal(&package) {
                continue;
            }
            let version = pinned_or_default(&package).to_string();
            dependencies.entry(package).or_insert(version);
        }
    }

    if needs_client_runtime {
        let (package, version) = CLIENT_RUNTIME_DEPENDENCY;
        dependencies
            .entry(package.to_string())
            .or_insert_with(|| version.to_string());
    }

    for primitive in detect_primitives(used_ids, registry) {
        for (package, version) in primitive_peer_dependencies(&primitive) {
            dependencies
                .entry((*package).to_string())
                .or_insert_with(|| (*version).to_string());
        }
    }

    Resolution {
        dependencies,
        dev_dependencies,
    }
}

/// Which shared UI primitives the used components reference; falls back to
/// the minimal default set when nothing is detected.
pub fn detect_primitives(
    used_ids: &BTreeSet<String>,
    registry: &dyn ComponentRegistry,
) -> BTreeSet<String> {
    let mut primitives = BTreeSet::new();
    for id in used_ids {
        if let Some(item) = registry.get_by_id(id) {
            primitives.extend(scan_primitive_refs(&item.code));
        }
    }
    if primitives.is_empty() {
        DEFAULT_PRIMITIVES.iter().map(|p| p.to_string()).collect()
    } else {
        primitives
    }
}
