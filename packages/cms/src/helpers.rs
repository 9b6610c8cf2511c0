//! Accessor module emission.

use crate::schema::type_name;
use weaver_compiler_page::RenderContext;
use weaver_model::naming::camel_case;
use weaver_model::CmsCollection;

/// Emit per-collection accessors: a published-only-by-default "get all"
/// and an id lookup with an optional result.
pub fn emit_helpers(collections: &[CmsCollection]) -> String {
    let mut ctx = RenderContext::new();

    let consts: Vec<String> = collections
        .iter()
        .map(|c| camel_case(&c.name))
        .collect();
    let types: Vec<String> = collections.iter().map(type_name).collect();
    ctx.line(&format!(
        "import {{ {} }} from \"./data\";",
        consts.join(", ")
    ));
    ctx.line(&format!(
        "import type {{ {} }} from \"./schema\";",
        types.join(", ")
    ));
    ctx.blank();

    for collection in collections {
        let type_name = type_name(collection);
        let const_name = camel_case(&collection.name);

        ctx.line(&format!(
            "export function getAll{}(options?: {{ includeDrafts?: boolean }}): {}[] {{",
            type_name, type_name
        ));
        ctx.indent();
        ctx.line("if (options?.includeDrafts) {");
        ctx.indent();
        ctx.line(&format!("return {};", const_name));
        ctx.dedent();
        ctx.line("}");
        ctx.line(&format!(
            "return {}.filter((item) => item._status === \"published\");",
            const_name
        ));
        ctx.dedent();
        ctx.line("}");
        ctx.blank();

        ctx.line(&format!(
            "export function get{}ById(id: string): {} | undefined {{",
            type_name, type_name
        ));
        ctx.indent();
        ctx.line(&format!(
            "return {}.find((item) => item.id === id);",
            const_name
        ));
        ctx.dedent();
        ctx.line("}");
        ctx.blank();
    }

    ctx.into_output()
}

/// Accessor stub emitted when instances bind CMS data but the project has
/// no collections; keeps generated imports resolvable.
pub fn emit_stub_helpers() -> String {
    let mut ctx = RenderContext::new();
    ctx.line("// This project binds CMS data but defines no collections yet.");
    ctx.blank();
    ctx.line("export function getAllEntries(): never[] {");
    ctx.indent();
    ctx.line("return [];");
    ctx.dedent();
    ctx.line("}");
    ctx.blank();
    ctx.line("export function getEntryById(_id: string): undefined {");
    ctx.indent();
    ctx.line("return undefined;");
    ctx.dedent();
    ctx.line("}");
    ctx.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(name: &str) -> CmsCollection {
        CmsCollection {
            id: name.to_lowercase(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            fields: vec![],
        }
    }

    #[test]
    fn emits_get_all_and_get_by_id() {
        let output = emit_helpers(&[collection("Blog Posts")]);

        println!("Generated helpers:\n{}", output);

        assert!(output.contains("import { blogPosts } from \"./data\";"));
        assert!(output.contains(
            "export function getAllBlogPosts(options?: { includeDrafts?: boolean }): BlogPosts[] {"
        ));
        assert!(output.contains("item._status === \"published\""));
        assert!(output
            .contains("export function getBlogPostsById(id: string): BlogPosts | undefined {"));
        assert!(output.contains(".find((item) => item.id === id);"));
    }

    #[test]
    fn get_all_defaults_to_published_only() {
        let output = emit_helpers(&[collection("Authors")]);
        let filter_pos = output.find("filter((item)").unwrap();
        let drafts_pos = output.find("includeDrafts").unwrap();
        assert!(drafts_pos < filter_pos);
    }

    #[test]
    fn stub_module_returns_empty_results() {
        let output = emit_stub_helpers();
        assert!(output.contains("export function getAllEntries(): never[] {"));
        assert!(output.contains("return [];"));
        assert!(output.contains("export function getEntryById(_id: string): undefined {"));
    }
}
