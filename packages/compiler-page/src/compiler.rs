//! Tree-to-markup generation.
//!
//! Renders one page's component-instance tree into a complete page module:
//! deduplicated imports followed by a default-exported page function whose
//! body is the depth-first rendering of the tree.

use crate::context::RenderContext;
use crate::style::{serialize_styles, to_camel_case};
use std::collections::BTreeMap;
use thiserror::Error;
use weaver_model::naming::{kebab_case, pascal_case};
use weaver_model::{ComponentInstance, ComponentRegistry, InstanceTree, Page, PropValue, TreeError};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid instance tree: {0}")]
    Tree(#[from] TreeError),
}

const HEADING_LEVELS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const DEFAULT_HEADING_LEVEL: &str = "h2";

/// Elements that never take children.
const VOID_TAGS: &[&str] = &["img", "hr", "br", "input"];

/// Fixed table mapping builtin pseudo-components to native element tags.
///
/// `heading` is listed here for membership checks but resolves its tag
/// dynamically from the `level` prop at render time.
pub fn builtin_tag(registry_id: &str) -> Option<&'static str> {
    match registry_id {
        "section" => Some("section"),
        "container" | "columns" => Some("div"),
        "heading" => Some(DEFAULT_HEADING_LEVEL),
        "text" => Some("p"),
        "image" => Some("img"),
        "link" => Some("a"),
        "button" => Some("button"),
        "list" => Some("ul"),
        "list-item" => Some("li"),
        "divider" => Some("hr"),
        _ => None,
    }
}

pub fn is_builtin(registry_id: &str) -> bool {
    builtin_tag(registry_id).is_some()
}

/// Output path for a registry item's generated module, relative to the
/// project root. The item's own path hint wins when present.
pub fn component_module_path(item: &weaver_model::RegistryItem) -> String {
    if let Some(hint) = &item.module_path {
        return hint.clone();
    }
    let group = if item.source.is_empty() {
        "custom"
    } else {
        item.source.as_str()
    };
    format!("components/{}/{}.tsx", group, kebab_case(&item.name))
}

/// Render one page's instance tree to a page module.
///
/// Instances with an unresolvable registry id emit an inert placeholder
/// comment and rendering continues; only a malformed tree aborts.
pub fn render_page(
    page: &Page,
    instances: &[ComponentInstance],
    registry: &dyn ComponentRegistry,
) -> Result<String, RenderError> {
    let tree = InstanceTree::build(instances)?;
    let mut ctx = RenderContext::new();

    let imports = collect_imports(instances, registry);
    for (ident, specifier) in &imports {
        ctx.line(&format!("import {} from \"{}\";", ident, specifier));
    }
    if !imports.is_empty() {
        ctx.blank();
    }

    ctx.line(&format!(
        "export default function {}Page() {{",
        pascal_case(&page.name)
    ));
    ctx.indent();
    ctx.line("return (");
    ctx.indent();

    let roots = tree.roots();
    if roots.len() == 1 {
        render_node(roots[0], &tree, registry, &mut ctx);
    } else {
        ctx.line("<>");
        ctx.indent();
        for root in roots {
            render_node(root, &tree, registry, &mut ctx);
        }
        ctx.dedent();
        ctx.line("</>");
    }

    ctx.dedent();
    ctx.line(");");
    ctx.dedent();
    ctx.line("}");

    Ok(ctx.into_output())
}

/// Import map for every resolvable non-builtin component on the page,
/// keyed by identifier so repeated instances collapse to one import.
fn collect_imports(
    instances: &[ComponentInstance],
    registry: &dyn ComponentRegistry,
) -> BTreeMap<String, String> {
    let mut imports = BTreeMap::new();
    for instance in instances {
        if is_builtin(&instance.component_registry_id) {
            continue;
        }
        if let Some(item) = registry.get_by_id(&instance.component_registry_id) {
            let path = component_module_path(item);
            let specifier = format!("@/{}", path.trim_end_matches(".tsx"));
            imports.insert(pascal_case(&item.name), specifier);
        }
    }
    imports
}

fn render_node(
    instance: &ComponentInstance,
    tree: &InstanceTree,
    registry: &dyn ComponentRegistry,
    ctx: &mut RenderContext,
) {
    let id = instance.component_registry_id.as_str();
    if is_builtin(id) {
        let tag = resolve_tag(instance);
        render_element(&tag, instance, tree, registry, ctx);
        return;
    }

    match registry.get_by_id(id) {
        Some(item) => {
            let tag = pascal_case(&item.name);
            render_element(&tag, instance, tree, registry, ctx);
        }
        None => {
            ctx.line(&format!("{{/* unresolved component: {} */}}", id));
        }
    }
}

fn render_element(
    tag: &str,
    instance: &ComponentInstance,
    tree: &InstanceTree,
    registry: &dyn ComponentRegistry,
    ctx: &mut RenderContext,
) {
    let attrs = render_attributes(instance);
    let children = tree.children_of(&instance.id);
    let text = instance.props.get("text").and_then(PropValue::as_text);

    if VOID_TAGS.contains(&tag) {
        ctx.line(&format!("<{}{} />", tag, attrs));
        return;
    }

    if !children.is_empty() {
        // Children win over a text prop; the text is discarded.
        ctx.line(&format!("<{}{}>", tag, attrs));
        ctx.indent();
        for child in children {
            render_node(child, tree, registry, ctx);
        }
        ctx.dedent();
        ctx.line(&format!("</{}>", tag));
    } else if let Some(text) = text {
        ctx.line(&format!("<{}{}>", tag, attrs));
        ctx.indent();
        ctx.line(&escape_text(text));
        ctx.dedent();
        ctx.line(&format!("</{}>", tag));
    } else {
        ctx.line(&format!("<{}{} />", tag, attrs));
    }
}

/// Serialize props and styles into attribute syntax, alphabetically
/// ordered, with the style attribute last. Returns either an empty string
/// or a string with a leading space.
fn render_attributes(instance: &ComponentInstance) -> String {
    let mut parts: Vec<String> = Vec::new();

    let props: BTreeMap<&String, &PropValue> = instance.props.iter().collect();
    for (name, value) in props {
        if is_reserved_prop(instance, name) {
            continue;
        }
        parts.push(render_attribute(name, value));
    }

    let styles = serialize_styles(&instance.styles);
    if !styles.is_empty() {
        let pairs: Vec<String> = styles
            .iter()
            .map(|(k, v)| format!("{}: \"{}\"", to_camel_case(k), escape_js_string(v)))
            .collect();
        parts.push(format!("style={{{{ {} }}}}", pairs.join(", ")));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

/// `text` and `children` are consumed by the renderer itself; `level`
/// selects the heading tag and never appears as an attribute.
fn is_reserved_prop(instance: &ComponentInstance, name: &str) -> bool {
    match name {
        "text" | "children" => true,
        "level" => instance.component_registry_id == "heading",
        _ => false,
    }
}

fn render_attribute(name: &str, value: &PropValue) -> String {
    match value {
        PropValue::Unsupported => unsupported_attribute(name),
        v if v.is_unsupported() => unsupported_attribute(name),
        PropValue::Text(s) => format!("{}={{\"{}\"}}", name, escape_js_string(s)),
        PropValue::Bool(true) => name.to_string(),
        PropValue::Bool(false) => format!("{}={{false}}", name),
        PropValue::Number(n) if n.is_finite() => format!("{}={{{}}}", name, n),
        PropValue::Number(_) => unsupported_attribute(name),
        PropValue::List(_) | PropValue::Map(_) => match serde_json::to_string(value) {
            Ok(literal) => format!("{}={{{}}}", name, literal),
            Err(_) => unsupported_attribute(name),
        },
    }
}

fn unsupported_attribute(name: &str) -> String {
    format!("{}={{undefined /* unsupported value */}}", name)
}

/// Resolve the element tag, including the heading builtin's dynamic level:
/// the `level` prop is validated against the h1-h6 set and falls back to
/// the default level when absent or invalid.
fn resolve_tag(instance: &ComponentInstance) -> String {
    if instance.component_registry_id == "heading" {
        let level = instance
            .props
            .get("level")
            .and_then(PropValue::as_text)
            .and_then(|l| {
                HEADING_LEVELS
                    .iter()
                    .copied()
                    .find(|h| h.eq_ignore_ascii_case(l))
            })
            .unwrap_or(DEFAULT_HEADING_LEVEL);
        return level.to_string();
    }
    builtin_tag(&instance.component_registry_id)
        .unwrap_or("div")
        .to_string()
}

/// Escape a string for embedding in a double-quoted JS string literal
/// inside an attribute expression. Markup-significant characters use
/// unicode escapes so re-parsing the attribute reconstructs the original
/// string exactly.
pub(crate) fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '{' => out.push_str("\\u007b"),
            '}' => out.push_str("\\u007d"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape element text content.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}
