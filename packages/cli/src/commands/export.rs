use super::{load_snapshot, parse_package_manager};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use weaver_exporter::{ExportSession, HttpFetcher, SourceFetcher, StaticFetcher};
use weaver_model::InMemoryRegistry;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project snapshot JSON file
    pub snapshot: PathBuf,

    /// Output archive path (defaults to <project-slug>-export.zip)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Endpoint serving fetched component sources; omit to export with
    /// embedded fallback code only
    #[arg(long)]
    pub source_endpoint: Option<String>,

    /// Package manager named in the generated README (npm, pnpm, yarn, bun)
    #[arg(long)]
    pub package_manager: Option<String>,
}

pub fn export(args: ExportArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let mut input = snapshot.input;

    if let Some(label) = &args.package_manager {
        input.options.package_manager = parse_package_manager(label)?;
    }

    let registry = InMemoryRegistry::new(snapshot.registry);
    let fetcher: Box<dyn SourceFetcher> = match &args.source_endpoint {
        Some(endpoint) => Box::new(HttpFetcher::new(endpoint.clone())),
        None => Box::new(StaticFetcher::empty()),
    };

    println!(
        "{} {}",
        "📦 Exporting".bright_blue().bold(),
        input.project.name
    );

    let mut session = ExportSession::new(&registry, fetcher);
    let archive = session.export_archive(&input)?;

    let out_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&archive.file_name));
    fs::write(&out_path, &archive.bytes)?;

    println!(
        "  {} {} ({} bytes)",
        "✓".green(),
        out_path.display(),
        archive.bytes.len()
    );

    Ok(())
}
