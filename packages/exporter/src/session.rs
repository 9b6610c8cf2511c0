//! Export session and project packaging.
//!
//! One session per export invocation: it owns the memoized source fetch
//! and the directive rule table, and orchestrates manifest, config,
//! theme, layout, page, component, and CMS generation into a virtual
//! path -> content map.

use crate::archive::{write_archive, ExportArchive};
use crate::error::ExportError;
use crate::fetch::{SourceBundle, SourceFetcher};
use crate::{layout, manifest, theme};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use weaver_cms::{emit_data, emit_helpers, emit_schema, emit_stub_helpers};
use weaver_compiler_page::{component_module_path, is_builtin, render_page};
use weaver_directives::DirectiveRules;
use weaver_model::naming::{pascal_case, slugify};
use weaver_model::{
    CmsCollection, CmsItem, ComponentInstance, ComponentRegistry, DesignSystem, ExportOptions,
    Page, Project,
};
use weaver_resolver::{detect_primitives, resolve};

/// Embedded fallbacks used when the source endpoint is unreachable.
const FALLBACK_UTILS: &str = r#"import { clsx, type ClassValue } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

const FALLBACK_BUTTON: &str = r#"import * as React from "react";
import { cn } from "@/lib/utils";

export interface ButtonProps
  extends React.ButtonHTMLAttributes<HTMLButtonElement> {}

const Button = React.forwardRef<HTMLButtonElement, ButtonProps>(
  ({ className, ...props }, ref) => (
    <button
      ref={ref}
      className={cn(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium",
        className
      )}
      {...props}
    />
  )
);
Button.displayName = "Button";

export { Button };
"#;

const FALLBACK_CARD: &str = r#"import * as React from "react";
import { cn } from "@/lib/utils";

const Card = React.forwardRef<
  HTMLDivElement,
  React.HTMLAttributes<HTMLDivElement>
>(({ className, ...props }, ref) => (
  <div
    ref={ref}
    className={cn("rounded-lg border bg-card shadow-sm", className)}
    {...props}
  />
));
Card.displayName = "Card";

const CardContent = React.forwardRef<
  HTMLDivElement,
  React.HTMLAttributes<HTMLDivElement>
>(({ className, ...props }, ref) => (
  <div ref={ref} className={cn("p-6", className)} {...props} />
));
CardContent.displayName = "CardContent";

export { Card, CardContent };
"#;

/// Read-only snapshot of everything one export run consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportInput {
    pub project: Project,
    #[serde(default)]
    pub design: DesignSystem,
    pub pages: Vec<Page>,
    /// Page id -> instances placed on that page.
    #[serde(default)]
    pub instances: HashMap<String, Vec<ComponentInstance>>,
    #[serde(default)]
    pub collections: Vec<CmsCollection>,
    #[serde(default)]
    pub items: Vec<CmsItem>,
    #[serde(default)]
    pub options: ExportOptions,
}

/// Virtual file map produced by one export run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportBundle {
    pub files: BTreeMap<String, String>,
}

impl ExportBundle {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

/// One export invocation over one project snapshot.
pub struct ExportSession<'a> {
    registry: &'a dyn ComponentRegistry,
    fetcher: Box<dyn SourceFetcher>,
    sources: Option<SourceBundle>,
    rules: DirectiveRules,
}

impl<'a> ExportSession<'a> {
    pub fn new(registry: &'a dyn ComponentRegistry, fetcher: Box<dyn SourceFetcher>) -> Self {
        Self {
            registry,
            fetcher,
            sources: None,
            rules: DirectiveRules::new(),
        }
    }

    /// Fetch the source bundle once and memoize it for the rest of the
    /// run.
    fn sources(&mut self) -> SourceBundle {
        if self.sources.is_none() {
            tracing::debug!("fetching component sources");
            self.sources = Some(self.fetcher.fetch());
        }
        self.sources.clone().unwrap_or_default()
    }

    /// Generate the complete project file map.
    pub fn export(&mut self, input: &ExportInput) -> Result<ExportBundle, ExportError> {
        let mut files: BTreeMap<String, String> = BTreeMap::new();

        let used = used_registry_ids(input);
        let resolution = resolve(&used, self.registry);

        files.insert(
            "package.json".to_string(),
            manifest::package_json(&input.project, &resolution)?,
        );
        files.insert("tsconfig.json".to_string(), manifest::tsconfig_json());
        files.insert("next.config.mjs".to_string(), manifest::next_config());
        files.insert("tailwind.config.ts".to_string(), manifest::tailwind_config());
        files.insert("postcss.config.mjs".to_string(), manifest::postcss_config());

        let overrides = style_overrides(input);
        files.insert(
            "app/globals.css".to_string(),
            theme::global_stylesheet(&input.design, &overrides),
        );
        files.insert(
            "app/layout.tsx".to_string(),
            layout::root_layout(&input.project, &input.design),
        );

        self.render_pages(input, &mut files)?;

        let sources = self.sources();
        self.emit_components(input, &used, &sources, &mut files);
        self.emit_primitives(&used, &sources, &mut files);

        files.insert(
            "lib/utils.ts".to_string(),
            sources
                .helpers
                .get("utils.ts")
                .cloned()
                .unwrap_or_else(|| FALLBACK_UTILS.to_string()),
        );

        if !input.collections.is_empty() {
            files.insert(
                "lib/cms/schema.ts".to_string(),
                emit_schema(&input.collections),
            );
            files.insert(
                "lib/cms/data.ts".to_string(),
                emit_data(&input.collections, &input.items),
            );
            files.insert(
                "lib/cms/helpers.ts".to_string(),
                emit_helpers(&input.collections),
            );
        } else if has_cms_bindings(input) {
            files.insert("lib/cms/helpers.ts".to_string(), emit_stub_helpers());
        }

        if input.options.include_gitignore {
            files.insert(".gitignore".to_string(), manifest::gitignore());
        }
        if input.options.include_env_example {
            files.insert(".env.example".to_string(), manifest::env_example());
        }
        if input.options.include_readme {
            files.insert(
                "README.md".to_string(),
                manifest::readme(&input.project, &input.options),
            );
        }

        tracing::debug!(files = files.len(), "export bundle assembled");
        Ok(ExportBundle { files })
    }

    /// Generate the full bundle and serialize it into a named archive.
    pub fn export_archive(&mut self, input: &ExportInput) -> Result<ExportArchive, ExportError> {
        let bundle = self.export(input)?;
        let bytes = write_archive(&bundle)?;
        Ok(ExportArchive {
            file_name: format!("{}-export.zip", slugify(&input.project.name)),
            bytes,
        })
    }

    /// Live-preview file map: same generation logic over the narrower
    /// set of manifest, build config, layout, and page modules.
    pub fn preview(&mut self, input: &ExportInput) -> Result<ExportBundle, ExportError> {
        let mut files: BTreeMap<String, String> = BTreeMap::new();

        let used = used_registry_ids(input);
        let resolution = resolve(&used, self.registry);

        files.insert(
            "package.json".to_string(),
            manifest::package_json(&input.project, &resolution)?,
        );
        files.insert("tsconfig.json".to_string(), manifest::tsconfig_json());
        files.insert("next.config.mjs".to_string(), manifest::next_config());
        files.insert(
            "app/layout.tsx".to_string(),
            layout::root_layout(&input.project, &input.design),
        );

        self.render_pages(input, &mut files)?;

        Ok(ExportBundle { files })
    }

    /// One page module per page, in list order; duplicate slugs resolve
    /// last write wins.
    fn render_pages(
        &self,
        input: &ExportInput,
        files: &mut BTreeMap<String, String>,
    ) -> Result<(), ExportError> {
        for page in &input.pages {
            let instances = input
                .instances
                .get(&page.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let module = render_page(page, instances, self.registry)?;
            files.insert(page_output_path(&page.slug), module);
        }
        Ok(())
    }

    /// One module per distinct used registry item. Precedence for the
    /// module body: instance code override, then fetched source, then the
    /// registry's embedded code; the known utility alias is rewritten and
    /// the result passes through the directive classifier.
    fn emit_components(
        &self,
        input: &ExportInput,
        used: &BTreeSet<String>,
        sources: &SourceBundle,
        files: &mut BTreeMap<String, String>,
    ) {
        let overrides = code_overrides(input);

        for id in used {
            let item = match self.registry.get_by_id(id) {
                Some(item) => item,
                None => {
                    tracing::warn!(id = %id, "skipping unresolved registry id");
                    continue;
                }
            };

            let path = component_module_path(item);
            let bucket_key = path.strip_prefix("components/").unwrap_or(&path);

            let code = match overrides.get(id.as_str()) {
                Some(override_code) => (*override_code).to_string(),
                None => sources
                    .components
                    .get(bucket_key)
                    .cloned()
                    .unwrap_or_else(|| item.code.clone()),
            };

            let code = code.replace("@/utils/cn", "@/lib/utils");
            let code = self.rules.ensure(&code, &item.source).into_owned();
            files.insert(path, code);
        }
    }

    /// UI primitives filtered to the detected-needed set (or the default
    /// set). A detected primitive with no fetched source degrades to an
    /// embedded fallback or an inert placeholder module.
    fn emit_primitives(
        &self,
        used: &BTreeSet<String>,
        sources: &SourceBundle,
        files: &mut BTreeMap<String, String>,
    ) {
        for name in detect_primitives(used, self.registry) {
            let content = sources
                .primitives
                .get(&format!("{}.tsx", name))
                .cloned()
                .unwrap_or_else(|| fallback_primitive(&name));
            files.insert(format!("components/ui/{}.tsx", name), content);
        }
    }
}

fn fallback_primitive(name: &str) -> String {
    match name {
        "button" => FALLBACK_BUTTON.to_string(),
        "card" => FALLBACK_CARD.to_string(),
        _ => {
            tracing::warn!(primitive = %name, "no source for primitive, emitting placeholder");
            format!(
                "// Source for the \"{}\" primitive was unavailable at export time.\nexport const {} = null;\n",
                name,
                pascal_case(name)
            )
        }
    }
}

/// Distinct non-builtin registry ids used across all pages.
fn used_registry_ids(input: &ExportInput) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    for instances in input.instances.values() {
        for instance in instances {
            if !is_builtin(&instance.component_registry_id) {
                used.insert(instance.component_registry_id.clone());
            }
        }
    }
    used
}

/// Instance code overrides by registry id. Pages are walked in list order
/// and instances in document order, so when several instances override
/// the same component the last one wins deterministically.
fn code_overrides(input: &ExportInput) -> BTreeMap<&str, &str> {
    let mut overrides = BTreeMap::new();
    for page in &input.pages {
        if let Some(instances) = input.instances.get(&page.id) {
            for instance in instances {
                if let Some(code) = &instance.code_override {
                    overrides.insert(instance.component_registry_id.as_str(), code.as_str());
                }
            }
        }
    }
    overrides
}

/// Instance style overrides, collected in page and document order.
fn style_overrides(input: &ExportInput) -> Vec<String> {
    let mut overrides = Vec::new();
    for page in &input.pages {
        if let Some(instances) = input.instances.get(&page.id) {
            for instance in instances {
                if let Some(css) = &instance.style_override {
                    overrides.push(css.clone());
                }
            }
        }
    }
    overrides
}

fn has_cms_bindings(input: &ExportInput) -> bool {
    input
        .instances
        .values()
        .flatten()
        .any(|instance| instance.cms_binding.is_some())
}

/// The `home` slug maps to the root route; every other slug maps to a
/// same-named subpath.
fn page_output_path(slug: &str) -> String {
    if slug == "home" {
        "app/page.tsx".to_string()
    } else {
        format!("app/{}/page.tsx", slug)
    }
}
