//! Typed schema emission for the dynamic content model.

use weaver_compiler_page::RenderContext;
use weaver_model::naming::pascal_case;
use weaver_model::{CmsCollection, CmsField, CmsFieldType};

/// Stable type name for a collection, derived from its display name.
pub fn type_name(collection: &CmsCollection) -> String {
    pascal_case(&collection.name)
}

/// Field slugs are user-authored; quote the ones that are not valid
/// identifiers.
pub(crate) fn object_key(slug: &str) -> String {
    let ident_safe = !slug.is_empty()
        && !slug.starts_with(|c: char| c.is_ascii_digit())
        && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ident_safe {
        slug.to_string()
    } else {
        format!("\"{}\"", slug.replace('"', "\\\""))
    }
}

/// Map a declared field kind to its target type.
///
/// Constrained-choice fields become a union of their fixed option list;
/// an empty option list degrades to plain `string`.
pub fn field_ts_type(field: &CmsField) -> String {
    match &field.field_type {
        CmsFieldType::Number => "number".to_string(),
        CmsFieldType::Boolean => "boolean".to_string(),
        CmsFieldType::Date => "string".to_string(),
        CmsFieldType::Select { options } if !options.is_empty() => options
            .iter()
            .map(|option| format!("\"{}\"", option.replace('"', "\\\"")))
            .collect::<Vec<_>>()
            .join(" | "),
        _ => "string".to_string(),
    }
}

/// Emit one interface per collection.
///
/// Every record type carries `id` and the reserved `_status` key; a field
/// is optional exactly when it is not required.
pub fn emit_schema(collections: &[CmsCollection]) -> String {
    let mut ctx = RenderContext::new();
    ctx.line("// Content types generated from the project's CMS collections.");
    ctx.blank();

    for collection in collections {
        ctx.line(&format!("export interface {} {{", type_name(collection)));
        ctx.indent();
        ctx.line("id: string;");
        for field in &collection.fields {
            let optional = if field.required { "" } else { "?" };
            ctx.line(&format!(
                "{}{}: {};",
                object_key(&field.slug),
                optional,
                field_ts_type(field)
            ));
        }
        ctx.line("_status: \"draft\" | \"published\";");
        ctx.dedent();
        ctx.line("}");
        ctx.blank();
    }

    ctx.into_output()
}
