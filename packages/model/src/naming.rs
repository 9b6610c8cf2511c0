//! Identifier and path casing helpers shared across the generators.

/// Convert a display name into a stable, type-identifier-safe PascalCase
/// name. Non-alphanumeric characters split segments; a leading digit gets a
/// `C` prefix so the result is always a valid identifier.
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() {
        return "Component".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'C');
    }
    out
}

/// PascalCase with a lowercased leading character.
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

/// Lowercase, hyphen-separated form used for file names and package names.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        "untitled".to_string()
    } else {
        out
    }
}

/// Slug transform for project names, shared by the package manifest name
/// and the archive file name.
pub fn slugify(name: &str) -> String {
    kebab_case(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_segments() {
        assert_eq!(pascal_case("hero section"), "HeroSection");
        assert_eq!(pascal_case("pricing-card"), "PricingCard");
        assert_eq!(pascal_case("FAQ"), "FAQ");
        assert_eq!(pascal_case("my_cool  widget"), "MyCoolWidget");
    }

    #[test]
    fn pascal_case_leading_digit() {
        assert_eq!(pascal_case("3d viewer"), "C3dViewer");
    }

    #[test]
    fn pascal_case_empty() {
        assert_eq!(pascal_case("--"), "Component");
    }

    #[test]
    fn camel_case_lowers_first() {
        assert_eq!(camel_case("Blog Posts"), "blogPosts");
    }

    #[test]
    fn kebab_case_collapses_separators() {
        assert_eq!(kebab_case("Hero  Section!"), "hero-section");
        assert_eq!(kebab_case("My Portfolio"), "my-portfolio");
        assert_eq!(kebab_case(""), "untitled");
    }
}
