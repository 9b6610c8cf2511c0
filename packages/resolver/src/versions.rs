//! Pinned version tables.
//!
//! Every package the resolver can emit is pinned here so repeated exports
//! of the same project produce identical manifests.

/// Fallback range for packages with no canonical pin.
pub const DEFAULT_VERSION: &str = "latest";

/// Shared runtime dependency forced in when any used component belongs to
/// an always-interactive source group.
pub const CLIENT_RUNTIME_DEPENDENCY: (&str, &str) = ("framer-motion", "^11.11.17");

/// Host framework packages; always present in the emitted manifest and
/// never re-added by the import scanner.
pub const FRAMEWORK_DEPENDENCIES: &[(&str, &str)] = &[
    ("next", "14.2.16"),
    ("react", "^18"),
    ("react-dom", "^18"),
];

/// Styling-utility and icon baseline seeded into every resolution.
pub const BASELINE_DEPENDENCIES: &[(&str, &str)] = &[
    ("clsx", "^2.1.1"),
    ("lucide-react", "^0.454.0"),
    ("tailwind-merge", "^2.5.5"),
];

pub const BASELINE_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/node", "^22"),
    ("@types/react", "^18"),
    ("@types/react-dom", "^18"),
    ("autoprefixer", "^10.4.20"),
    ("postcss", "^8.5"),
    ("tailwindcss", "^3.4.17"),
    ("tailwindcss-animate", "^1.0.7"),
    ("typescript", "^5"),
];

/// Canonical name -> pinned version table for flat dependency names and
/// scanner discoveries.
pub fn canonical_version(package: &str) -> Option<&'static str> {
    let version = match package {
        "framer-motion" => "^11.11.17",
        "gsap" => "^3.12.5",
        "date-fns" => "^4.1.0",
        "recharts" => "^2.15.0",
        "embla-carousel-react" => "8.5.1",
        "react-hook-form" => "^7.54.1",
        "@hookform/resolvers" => "^3.9.1",
        "zod" => "^3.24.1",
        "sonner" => "^1.7.1",
        "next-themes" => "^0.4.4",
        "cmdk" => "1.0.4",
        "vaul" => "^0.9.6",
        "input-otp" => "1.4.1",
        "react-day-picker" => "8.10.1",
        "react-resizable-panels" => "^2.1.7",
        "swr" => "^2.2.5",
        "three" => "^0.171.0",
        "@react-three/fiber" => "^8.17.10",
        "class-variance-authority" => "^0.7.1",
        "clsx" => "^2.1.1",
        "tailwind-merge" => "^2.5.5",
        "lucide-react" => "^0.454.0",
        _ => return None,
    };
    Some(version)
}

pub fn pinned_or_default(package: &str) -> &'static str {
    canonical_version(package).unwrap_or(DEFAULT_VERSION)
}

/// Modules resolved by the host framework itself; the import scanner
/// ignores them.
pub fn is_framework_internal(package: &str) -> bool {
    matches!(package, "react" | "react-dom" | "next")
}

/// Primitives assumed present when detection finds nothing.
pub const DEFAULT_PRIMITIVES: &[&str] = &["button", "card"];

/// Peer dependencies declared by each shared UI primitive.
pub fn primitive_peer_dependencies(primitive: &str) -> &'static [(&'static str, &'static str)] {
    match primitive {
        "button" | "badge" => &[("@radix-ui/react-slot", "1.1.1")],
        "accordion" => &[("@radix-ui/react-accordion", "1.2.2")],
        "avatar" => &[("@radix-ui/react-avatar", "1.1.2")],
        "checkbox" => &[("@radix-ui/react-checkbox", "1.1.3")],
        "dialog" => &[("@radix-ui/react-dialog", "1.1.4")],
        "dropdown-menu" => &[("@radix-ui/react-dropdown-menu", "2.1.4")],
        "label" => &[("@radix-ui/react-label", "2.1.1")],
        "popover" => &[("@radix-ui/react-popover", "1.1.4")],
        "select" => &[("@radix-ui/react-select", "2.1.4")],
        "separator" => &[("@radix-ui/react-separator", "1.1.1")],
        "slider" => &[("@radix-ui/react-slider", "1.2.2")],
        "switch" => &[("@radix-ui/react-switch", "1.1.2")],
        "tabs" => &[("@radix-ui/react-tabs", "1.1.2")],
        "tooltip" => &[("@radix-ui/react-tooltip", "1.1.6")],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_hits_and_misses() {
        assert_eq!(canonical_version("framer-motion"), Some("^11.11.17"));
        assert_eq!(canonical_version("left-pad"), None);
        assert_eq!(pinned_or_default("left-pad"), DEFAULT_VERSION);
    }

    #[test]
    fn framework_internals_are_recognized() {
        assert!(is_framework_internal("react"));
        assert!(is_framework_internal("next"));
        assert!(!is_framework_internal("framer-motion"));
    }

    #[test]
    fn primitives_without_peers_return_empty() {
        assert!(primitive_peer_dependencies("card").is_empty());
        assert_eq!(
            primitive_peer_dependencies("dialog"),
            &[("@radix-ui/react-dialog", "1.1.4")]
        );
    }
}
