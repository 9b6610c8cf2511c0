//! Package manifest, tooling config, and auxiliary file generation.

use serde_json::json;
use weaver_model::naming::slugify;
use weaver_model::{ExportOptions, Project};
use weaver_resolver::{Resolution, FRAMEWORK_DEPENDENCIES};

/// Root package manifest. The project name slug becomes the package name;
/// framework packages are always present but never overwrite a resolver
/// pin.
pub fn package_json(project: &Project, resolution: &Resolution) -> Result<String, serde_json::Error> {
    let mut dependencies = resolution.dependencies.clone();
    for (package, version) in FRAMEWORK_DEPENDENCIES {
        dependencies
            .entry((*package).to_string())
            .or_insert_with(|| (*version).to_string());
    }

    let manifest = json!({
        "name": slugify(&project.name),
        "version": "0.1.0",
        "private": true,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint"
        },
        "dependencies": dependencies,
        "devDependencies": resolution.dev_dependencies
    });

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}

pub fn tsconfig_json() -> String {
    r#"{
  "compilerOptions": {
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "target": "ES6",
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [
      {
        "name": "next"
      }
    ],
    "paths": {
      "@/*": ["./*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#
    .to_string()
}

pub fn next_config() -> String {
    r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  images: {
    unoptimized: true,
  },
};

export default nextConfig;
"#
    .to_string()
}

pub fn tailwind_config() -> String {
    r#"import type { Config } from "tailwindcss";

const config: Config = {
  darkMode: ["class"],
  content: [
    "./app/**/*.{ts,tsx}",
    "./components/**/*.{ts,tsx}",
  ],
  theme: {
    extend: {
      fontFamily: {
        heading: ["var(--font-heading)"],
        body: ["var(--font-body)"],
      },
    },
  },
  plugins: [require("tailwindcss-animate")],
};

export default config;
"#
    .to_string()
}

pub fn postcss_config() -> String {
    r#"/** @type {import('postcss-load-config').Config} */
const config = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};

export default config;
"#
    .to_string()
}

pub fn gitignore() -> String {
    r#"# dependencies
/node_modules

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# env files
.env*.local

# typescript
*.tsbuildinfo
next-env.d.ts
"#
    .to_string()
}

pub fn env_example() -> String {
    r#"# Copy to .env.local and fill in the values your deployment needs.
# NEXT_PUBLIC_SITE_URL=https://example.com
"#
    .to_string()
}

pub fn readme(project: &Project, options: &ExportOptions) -> String {
    let pm = options.package_manager;
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", project.name));
    if !project.description.is_empty() {
        out.push_str(&format!("{}\n\n", project.description));
    }
    out.push_str("This project was exported from the Weaver visual builder.\n\n");
    out.push_str("## Getting started\n\n");
    out.push_str("```bash\n");
    out.push_str(&format!("{}\n", pm.install_command()));
    out.push_str(&format!("{}\n", pm.dev_command()));
    out.push_str("```\n\n");
    out.push_str("Then open http://localhost:3000 in your browser.\n");
    out
}
