//! Typed data literal emission.

use crate::schema::{object_key, type_name};
use weaver_compiler_page::RenderContext;
use weaver_model::naming::camel_case;
use weaver_model::{CmsCollection, CmsItem};

/// Emit one typed literal collection per CMS collection.
///
/// Items are filtered by collection id and projected into flat records:
/// `id`, every schema field (missing values serialize as `null`), and the
/// item status under the reserved `_status` key.
pub fn emit_data(collections: &[CmsCollection], items: &[CmsItem]) -> String {
    let mut ctx = RenderContext::new();

    if !collections.is_empty() {
        let names: Vec<String> = collections.iter().map(type_name).collect();
        ctx.line(&format!(
            "import type {{ {} }} from \"./schema\";",
            names.join(", ")
        ));
        ctx.blank();
    }

    for collection in collections {
        ctx.line(&format!(
            "export const {}: {}[] = [",
            camel_case(&collection.name),
            type_name(collection)
        ));
        ctx.indent();

        for item in items.iter().filter(|i| i.collection_id == collection.id) {
            ctx.line("{");
            ctx.indent();
            ctx.line(&format!("id: {},", ts_string(&item.id)));
            for field in &collection.fields {
                let value = item
                    .data
                    .get(&field.slug)
                    .map(ts_value)
                    .unwrap_or_else(|| "null".to_string());
                ctx.line(&format!("{}: {},", object_key(&field.slug), value));
            }
            ctx.line(&format!("_status: {},", ts_string(item.status.as_str())));
            ctx.dedent();
            ctx.line("},");
        }

        ctx.dedent();
        ctx.line("];");
        ctx.blank();
    }

    ctx.into_output()
}

fn ts_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// JSON values are valid TS literals as-is.
fn ts_value(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
