mod resolve;
mod scanner;
mod versions;

pub use resolve::{detect_primitives, resolve, Resolution};
pub use scanner::{normalize_specifier, scan_imports, scan_primitive_refs};
pub use versions::{
    canonical_version, pinned_or_default, primitive_peer_dependencies, CLIENT_RUNTIME_DEPENDENCY,
    DEFAULT_PRIMITIVES, DEFAULT_VERSION, FRAMEWORK_DEPENDENCIES,
};
