//! Global theme stylesheet generation.
//!
//! Variables are copied 1:1 from the design-token maps; the dark-mode
//! variant swaps each foreground/background-derived token pair. Token
//! values are assumed pre-validated by the editor and pass through
//! verbatim.

use std::collections::BTreeMap;
use weaver_compiler_page::RenderContext;
use weaver_model::DesignSystem;

pub fn global_stylesheet(design: &DesignSystem, overrides: &[String]) -> String {
    let mut ctx = RenderContext::new();

    ctx.line("@tailwind base;");
    ctx.line("@tailwind components;");
    ctx.line("@tailwind utilities;");
    ctx.blank();

    ctx.line(":root {");
    ctx.indent();
    for (name, value) in &design.colors {
        ctx.line(&format!("--color-{}: {};", name, value));
    }
    ctx.line(&format!(
        "--font-heading: \"{}\", sans-serif;",
        design.typography.heading_font
    ));
    ctx.line(&format!(
        "--font-body: \"{}\", sans-serif;",
        design.typography.body_font
    ));
    for (name, value) in &design.typography.sizes {
        ctx.line(&format!("--text-{}: {};", name, value));
    }
    for (name, value) in &design.typography.weights {
        ctx.line(&format!("--font-weight-{}: {};", name, value));
    }
    for (name, value) in &design.typography.line_heights {
        ctx.line(&format!("--leading-{}: {};", name, value));
    }
    for (name, value) in &design.radius {
        ctx.line(&format!("--radius-{}: {};", name, value));
    }
    for (index, step) in design.spacing.scale.iter().enumerate() {
        ctx.line(&format!(
            "--spacing-{}: {}{};",
            index + 1,
            step,
            design.spacing.unit
        ));
    }
    if let Some(shadows) = &design.shadows {
        for (name, value) in shadows {
            ctx.line(&format!("--shadow-{}: {};", name, value));
        }
    }
    ctx.dedent();
    ctx.line("}");

    let dark = dark_palette(&design.colors);
    if !dark.is_empty() {
        ctx.blank();
        ctx.line(".dark {");
        ctx.indent();
        for (name, value) in &dark {
            ctx.line(&format!("--color-{}: {};", name, value));
        }
        ctx.dedent();
        ctx.line("}");
    }

    if !overrides.is_empty() {
        ctx.blank();
        ctx.line("/* instance style overrides */");
        for block in overrides {
            ctx.push(block.trim_end());
            ctx.blank();
        }
    }

    ctx.into_output()
}

/// Derive the dark palette by swapping each token with its
/// foreground/background partner: `background` <-> `foreground` and
/// `X` <-> `X-foreground`. Tokens without a partner keep their light
/// value and are omitted from the dark block.
fn dark_palette(colors: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut dark = BTreeMap::new();
    for key in colors.keys() {
        let partner = if key == "background" {
            "foreground".to_string()
        } else if key == "foreground" {
            "background".to_string()
        } else if let Some(base) = key.strip_suffix("-foreground") {
            base.to_string()
        } else {
            format!("{}-foreground", key)
        };
        if let Some(partner_value) = colors.get(&partner) {
            dark.insert(key.clone(), partner_value.clone());
        }
    }
    dark
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaver_model::{DesignSystem, Spacing};

    fn design() -> DesignSystem {
        let mut design = DesignSystem::default();
        design
            .colors
            .insert("background".to_string(), "#ffffff".to_string());
        design
            .colors
            .insert("foreground".to_string(), "#0a0a0a".to_string());
        design
            .colors
            .insert("primary".to_string(), "#2563eb".to_string());
        design
            .colors
            .insert("primary-foreground".to_string(), "#f8fafc".to_string());
        design
            .colors
            .insert("accent".to_string(), "#f59e0b".to_string());
        design.radius.insert("md".to_string(), "0.5rem".to_string());
        design.spacing = Spacing {
            unit: "px".to_string(),
            scale: vec![4.0, 8.0, 16.0],
        };
        design
    }

    #[test]
    fn copies_tokens_one_to_one() {
        let css = global_stylesheet(&design(), &[]);

        assert!(css.starts_with("@tailwind base;"));
        assert!(css.contains("--color-background: #ffffff;"));
        assert!(css.contains("--color-primary: #2563eb;"));
        assert!(css.contains("--radius-md: 0.5rem;"));
        assert!(css.contains("--spacing-1: 4px;"));
        assert!(css.contains("--spacing-3: 16px;"));
        assert!(css.contains("--font-heading: \"Inter\", sans-serif;"));
    }

    #[test]
    fn dark_variant_swaps_paired_tokens() {
        let css = global_stylesheet(&design(), &[]);
        let dark_start = css.find(".dark {").expect("dark block missing");
        let dark = &css[dark_start..];

        assert!(dark.contains("--color-background: #0a0a0a;"));
        assert!(dark.contains("--color-foreground: #ffffff;"));
        assert!(dark.contains("--color-primary: #f8fafc;"));
        assert!(dark.contains("--color-primary-foreground: #2563eb;"));
        // Unpaired tokens are not overridden in dark mode.
        assert!(!dark.contains("--color-accent"));
    }

    #[test]
    fn no_dark_block_without_paired_tokens() {
        let mut design = DesignSystem::default();
        design
            .colors
            .insert("accent".to_string(), "#f59e0b".to_string());
        let css = global_stylesheet(&design, &[]);
        assert!(!css.contains(".dark {"));
    }

    #[test]
    fn appends_instance_overrides() {
        let css = global_stylesheet(&design(), &[".hero { background: url(x.png); }".to_string()]);
        assert!(css.contains("/* instance style overrides */"));
        assert!(css.contains(".hero { background: url(x.png); }"));
    }
}
