//! Root layout module generation.

use weaver_compiler_page::RenderContext;
use weaver_model::naming::camel_case;
use weaver_model::{DesignSystem, Project};

pub fn root_layout(project: &Project, design: &DesignSystem) -> String {
    let heading = design.typography.heading_font.as_str();
    let body = design.typography.body_font.as_str();

    let mut ctx = RenderContext::new();
    ctx.line("import type { Metadata } from \"next\";");

    if heading == body {
        ctx.line(&format!(
            "import {{ {} }} from \"next/font/google\";",
            font_import_name(heading)
        ));
    } else {
        ctx.line(&format!(
            "import {{ {}, {} }} from \"next/font/google\";",
            font_import_name(heading),
            font_import_name(body)
        ));
    }
    ctx.blank();
    ctx.line("import \"./globals.css\";");
    ctx.blank();

    let class_names = if heading == body {
        let name = camel_case(heading);
        ctx.line(&format!(
            "const {} = {}({{ subsets: [\"latin\"], variable: \"--font-sans\" }});",
            name,
            font_import_name(heading)
        ));
        format!("${{{}.variable}}", name)
    } else {
        let heading_name = camel_case(heading);
        let body_name = camel_case(body);
        ctx.line(&format!(
            "const {} = {}({{ subsets: [\"latin\"], variable: \"--font-heading\" }});",
            heading_name,
            font_import_name(heading)
        ));
        ctx.line(&format!(
            "const {} = {}({{ subsets: [\"latin\"], variable: \"--font-body\" }});",
            body_name,
            font_import_name(body)
        ));
        format!("${{{}.variable}} ${{{}.variable}}", heading_name, body_name)
    };
    ctx.blank();

    ctx.line("export const metadata: Metadata = {");
    ctx.indent();
    ctx.line(&format!("title: {},", ts_string(&project.name)));
    ctx.line(&format!("description: {},", ts_string(&project.description)));
    ctx.dedent();
    ctx.line("};");
    ctx.blank();

    ctx.line("export default function RootLayout({");
    ctx.line("  children,");
    ctx.line("}: {");
    ctx.line("  children: React.ReactNode;");
    ctx.line("}) {");
    ctx.indent();
    ctx.line("return (");
    ctx.indent();
    ctx.line("<html lang=\"en\">");
    ctx.indent();
    ctx.line(&format!("<body className={{`{}`}}>{{children}}</body>", class_names));
    ctx.dedent();
    ctx.line("</html>");
    ctx.dedent();
    ctx.line(");");
    ctx.dedent();
    ctx.line("}");

    ctx.into_output()
}

/// Google-font export name: `Open Sans` -> `Open_Sans`.
fn font_import_name(family: &str) -> String {
    family.trim().replace(' ', "_")
}

fn ts_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaver_model::Typography;

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            name: "My Portfolio".to_string(),
            description: "A personal site".to_string(),
        }
    }

    #[test]
    fn wires_distinct_heading_and_body_fonts() {
        let mut design = DesignSystem::default();
        design.typography = Typography {
            heading_font: "Open Sans".to_string(),
            body_font: "Inter".to_string(),
            ..Typography::default()
        };

        let layout = root_layout(&project(), &design);

        println!("Generated layout:\n{}", layout);

        assert!(layout.contains("import { Open_Sans, Inter } from \"next/font/google\";"));
        assert!(layout.contains("variable: \"--font-heading\""));
        assert!(layout.contains("variable: \"--font-body\""));
        assert!(layout.contains("${openSans.variable} ${inter.variable}"));
    }

    #[test]
    fn deduplicates_identical_fonts() {
        let design = DesignSystem::default();
        let layout = root_layout(&project(), &design);

        assert_eq!(layout.matches("from \"next/font/google\"").count(), 1);
        assert!(layout.contains("import { Inter } from \"next/font/google\";"));
        assert!(layout.contains("variable: \"--font-sans\""));
        assert!(!layout.contains("--font-heading"));
    }

    #[test]
    fn metadata_comes_from_project() {
        let layout = root_layout(&project(), &DesignSystem::default());
        assert!(layout.contains("title: \"My Portfolio\","));
        assert!(layout.contains("description: \"A personal site\","));
    }
}
